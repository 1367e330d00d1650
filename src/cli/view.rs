// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the read-only views.
//!
//! ```text
//! diff                     git diff
//! diff --staged            git diff --cached
//! show [REV]               git show HEAD
//! log [-n N]               git log --oneline -N
//! log --graph              git log --oneline --graph --all -N
//! log --full               git log -N
//! ```
//!
//! All of them run attached to the terminal so git's pager works.

use clap::Args;

/// Commits shown by `log` when `-n` is not given.
pub const DEFAULT_LOG_COUNT: usize = 10;

/// Arguments for the `diff` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DiffArgs {
    /// Show staged changes instead of unstaged ones.
    #[arg(short = 's', long, visible_alias = "cached")]
    pub staged: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Revision to show.
    #[arg(value_name = "REV", default_value = "HEAD")]
    pub revision: String,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self {
            revision: "HEAD".to_string(),
        }
    }
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Number of commits to show.
    #[arg(short = 'n', long = "count", value_name = "N", default_value_t = DEFAULT_LOG_COUNT)]
    pub count: usize,

    /// One line per commit with the branch graph of all refs.
    #[arg(long, conflicts_with = "full")]
    pub graph: bool,

    /// Full commit messages.
    #[arg(long)]
    pub full: bool,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_LOG_COUNT,
            graph: false,
            full: false,
        }
    }
}
