// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only views: diff, show and log.
//!
//! ```text
//! DiffArgs / ShowArgs / LogArgs --> git args --> interactive CommandRequest
//!                                               (terminal and pager inherited)
//! ```

use anyhow::bail;

use super::session::Session;
use crate::cli::view::{DiffArgs, LogArgs, ShowArgs};
use crate::core::runner::CommandRequest;
use crate::error::Result;

#[must_use]
pub fn diff_args(args: &DiffArgs) -> Vec<String> {
    let mut git_args = vec!["diff".to_string()];
    if args.staged {
        git_args.push("--cached".to_string());
    }
    git_args
}

#[must_use]
pub fn show_args(args: &ShowArgs) -> Vec<String> {
    vec!["show".to_string(), args.revision.clone()]
}

/// `git log` arguments; `--graph` covers every ref.
#[must_use]
pub fn log_args(args: &LogArgs) -> Vec<String> {
    let mut git_args = vec!["log".to_string()];
    if args.graph {
        git_args.extend(["--oneline", "--graph", "--all"].map(String::from));
    } else if !args.full {
        git_args.push("--oneline".to_string());
    }
    git_args.push(format!("-{}", args.count.max(1)));
    git_args
}

/// Runs git attached to the terminal.
async fn run_attached(session: &Session, git_args: Vec<String>) -> Result<()> {
    let request = CommandRequest::git(git_args)
        .with_interactive(true)
        .with_cwd(session.workdir());
    let outcome = session.runner().run(&request).await?;
    if !outcome.succeeded() {
        bail!("`{}` failed: {}", request.command_line(), outcome.failure_message());
    }
    Ok(())
}

/// Main handler for diff command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository or git fails.
pub async fn run_diff_command(args: &DiffArgs, session: &Session) -> Result<()> {
    session.ensure_repo()?;
    run_attached(session, diff_args(args)).await
}

/// Main handler for show command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository or the revision
/// does not exist.
pub async fn run_show_command(args: &ShowArgs, session: &Session) -> Result<()> {
    session.ensure_repo()?;
    run_attached(session, show_args(args)).await
}

/// Main handler for log command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository or has no commits.
pub async fn run_log_command(args: &LogArgs, session: &Session) -> Result<()> {
    session.ensure_repo()?;
    run_attached(session, log_args(args)).await
}
