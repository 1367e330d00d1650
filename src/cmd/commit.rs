// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit command implementation for gw.
//!
//! ```text
//! [--all: git add -A]
//! git [-c user.name=..] [-c user.email=..] commit [-m MSG]
//! [--push or push.auto_push: push current branch to the default remote]
//! ```

use anyhow::bail;

use super::add::stage_all;
use super::push::push_after_commit;
use super::session::Session;
use crate::cli::stage::CommitArgs;
use crate::config::types::UserConfig;
use crate::core::runner::CommandRequest;
use crate::error::Result;
use crate::git::query::{self, ChangedFile};

/// `-c user.name=...` / `-c user.email=...` for the configured identity.
///
/// Unset fields leave git's own configuration in charge.
#[must_use]
pub fn identity_overrides(user: &UserConfig) -> Vec<String> {
    let mut args = Vec::new();
    if !user.name.is_empty() {
        args.extend(["-c".to_string(), format!("user.name={}", user.name)]);
    }
    if !user.email.is_empty() {
        args.extend(["-c".to_string(), format!("user.email={}", user.email)]);
    }
    args
}

/// Main handler for commit command.
///
/// Without `-m` git runs attached to the terminal so the editor can open.
///
/// # Errors
///
/// Returns an error if staging fails, git refuses the commit (nothing staged,
/// empty message) or the follow-up push fails.
pub async fn run_commit_command(args: &CommitArgs, session: &mut Session) -> Result<()> {
    session.ensure_repo()?;
    let printer = session.printer();

    if args.all {
        printer.working("Adding all changes...");
        stage_all(session).await?;
    } else {
        let changes = query::changed_files(session.runner(), session.workdir()).await?;
        if !changes.iter().any(ChangedFile::is_staged) {
            bail!("nothing staged to commit; use `gw add` or `gw commit --all`");
        }
    }

    let mut git_args = identity_overrides(&session.config().user);
    git_args.push("commit".to_string());
    let interactive = match &args.message {
        Some(message) if message.trim().is_empty() => bail!("commit message required"),
        Some(message) => {
            printer.working(format!("Committing with message: '{message}'"));
            git_args.extend(["-m".to_string(), message.clone()]);
            false
        }
        None => true,
    };
    let request = CommandRequest::git(git_args)
        .with_interactive(interactive)
        .with_cwd(session.workdir());

    let outcome = session.runner().run(&request).await?;
    if !outcome.succeeded() {
        bail!("commit failed: {}", outcome.failure_message());
    }

    printer.success("Commit successful!");
    let description = args
        .message
        .as_deref()
        .map_or_else(|| "Committed".to_string(), |m| format!("Committed: {m}"));
    session.record("commit", description);

    if args.should_push(session.config().push.auto_push) {
        push_after_commit(session).await?;
    }
    Ok(())
}
