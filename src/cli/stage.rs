// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staging and commit arguments.
//!
//! ```text
//! add                 interactive selector over changed files
//! add --all           git add -A
//! add FILE...         git add -- FILE...
//!
//! commit -m MSG       git commit -m MSG
//! commit              git commit (opens the editor)
//!   --all             stage everything first
//!   --push/--no-push  override push.auto_push
//! ```

use clap::Args;

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AddArgs {
    /// Stage every change without asking.
    #[arg(short = 'A', long, conflicts_with = "files")]
    pub all: bool,

    /// Files to stage; skips the selector.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CommitArgs {
    /// Commit message. Without it git opens the editor.
    #[arg(short = 'm', long = "message", value_name = "MSG")]
    pub message: Option<String>,

    /// Stage all changes before committing.
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Push to the default remote afterwards.
    #[arg(long, conflicts_with = "no_push")]
    pub push: bool,

    /// Do not push, even if push.auto_push is on.
    #[arg(long)]
    pub no_push: bool,
}

impl CommitArgs {
    /// Whether to push after committing, given the configured default.
    #[must_use]
    pub const fn should_push(&self, auto_push: bool) -> bool {
        if self.push {
            true
        } else if self.no_push {
            false
        } else {
            auto_push
        }
    }
}
