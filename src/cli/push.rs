// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push command arguments.
//!
//! # Remote Selection
//!
//! ```text
//! push                     → defaults.remote
//! push origin backup       → exactly these, in this order
//! push --all-remotes       → every registered remote (asks first, -y skips)
//! ```
//!
//! # Mode
//!
//! ```text
//! --sequential | --parallel   override push.parallel
//! -j N                        override push.max_concurrency
//! --timeout SECS              override push.timeout_secs
//! --dry-run                   print the planned commands, run nothing
//! --check                     ask each remote (git push --dry-run)
//! ```
//!
//! # Sync
//!
//! ```text
//! sync [REMOTE] [-b BRANCH]    fetch, pull, push against one remote
//! ```

use clap::Args;

use crate::config::types::PushConfig;
use crate::push::PushFlags;

/// Arguments for the `push` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PushArgs {
    /// Remotes to push to, in order.
    #[arg(value_name = "REMOTE", conflicts_with = "all_remotes")]
    pub remotes: Vec<String>,

    /// Push to every configured remote.
    #[arg(long = "all-remotes")]
    pub all_remotes: bool,

    /// Do not ask before pushing to every remote.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Branch to push [default: current branch].
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Force push.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Push tags as well.
    #[arg(long)]
    pub tags: bool,

    /// Set the upstream of the branch.
    #[arg(short = 'u', long = "set-upstream")]
    pub set_upstream: bool,

    /// Push one remote at a time.
    #[arg(long, conflicts_with = "parallel")]
    pub sequential: bool,

    /// Push to remotes concurrently.
    #[arg(long)]
    pub parallel: bool,

    /// Maximum simultaneous pushes.
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// Kill a push that runs longer than SECS.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show what would be pushed without running anything.
    #[arg(short = 'n', long = "dry-run", conflicts_with = "check")]
    pub dry_run: bool,

    /// Contact the remotes but do not update them (git push --dry-run).
    #[arg(long)]
    pub check: bool,
}

impl PushArgs {
    #[must_use]
    pub fn flags(&self) -> PushFlags {
        let mut flags = PushFlags::empty();
        flags.set(PushFlags::FORCE, self.force);
        flags.set(PushFlags::TAGS, self.tags);
        flags.set(PushFlags::SET_UPSTREAM, self.set_upstream);
        flags.set(PushFlags::REMOTE_CHECK, self.check);
        flags
    }

    /// Applies the command-line overrides to the configured push settings.
    #[must_use]
    pub fn resolve(&self, config: &PushConfig) -> PushConfig {
        let parallel = if self.sequential {
            false
        } else {
            self.parallel || config.parallel
        };

        PushConfig {
            parallel,
            max_concurrency: self.jobs.unwrap_or(config.max_concurrency),
            timeout_secs: self.timeout.or(config.timeout_secs),
            ..config.clone()
        }
    }
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Remote to sync with [default: defaults.remote].
    #[arg(value_name = "REMOTE")]
    pub remote: Option<String>,

    /// Branch to sync [default: current branch].
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub branch: Option<String>,
}
