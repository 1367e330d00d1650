// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Add command implementation for gw.
//!
//! ```text
//! --all        git add -A
//! FILE...      git add -- FILE...
//! (nothing)    changed_files --> Selector (all preselected)
//!                  |  spawn_blocking: raw-mode key loop
//!                  v
//!              Confirmed --> git add -- <selected>
//!              Cancelled --> nothing staged
//! ```

use anyhow::Context;

use super::session::Session;
use crate::cli::stage::AddArgs;
use crate::error::{Result, SelectError};
use crate::git::query::{self, ChangedFile};
use crate::select::terminal::{SelectorStyle, select_interactive};
use crate::select::{BoundaryPolicy, SelectionOutcome, Selector};

/// Stages `paths` with `git add --`.
///
/// # Errors
///
/// Returns an error if git cannot run or refuses a path.
pub async fn stage_paths(session: &Session, paths: &[&str]) -> Result<()> {
    let mut args = vec!["add", "--"];
    args.extend_from_slice(paths);
    query::git_output(session.runner(), session.workdir(), &args).await?;
    Ok(())
}

/// Stages every change, including deletions and untracked files.
///
/// # Errors
///
/// Returns an error if `git add -A` fails.
pub async fn stage_all(session: &Session) -> Result<()> {
    query::git_output(session.runner(), session.workdir(), &["add", "-A"]).await?;
    Ok(())
}

/// Selector label for a changed file: `"XY path"`.
#[must_use]
pub fn file_label(file: &ChangedFile) -> String {
    format!("{} {}", file.status, file.path)
}

/// Maps a selection back to the files it was built from.
#[must_use]
pub fn chosen_files<'a>(files: &'a [ChangedFile], outcome: &SelectionOutcome) -> Vec<&'a str> {
    match outcome {
        SelectionOutcome::Confirmed(items) => files
            .iter()
            .zip(items)
            .filter(|(_, item)| item.is_selected())
            .map(|(file, _)| file.path.as_str())
            .collect(),
        SelectionOutcome::Cancelled => Vec::new(),
    }
}

/// Lets the user pick files on the terminal.
async fn select_files(session: &Session, files: &[ChangedFile]) -> Result<SelectionOutcome> {
    let selector = Selector::new(files.iter().map(file_label), BoundaryPolicy::Clamp)
        .with_preselect_all(true);
    let printer = session.printer();
    let style = SelectorStyle::builder()
        .with_title("Select files to add")
        .with_color(printer.color_enabled())
        .with_emoji(printer.emoji_enabled())
        .build();

    let outcome = tokio::task::spawn_blocking(move || select_interactive(selector, &style))
        .await
        .context("selector task failed")?;

    match outcome {
        Err(SelectError::NotATerminal) => Err(anyhow::Error::new(SelectError::NotATerminal)
            .context("no terminal for the file selector; use `gw add --all` or name the files")),
        other => Ok(other?),
    }
}

/// Main handler for add command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository, no terminal is
/// available for the selector, or git fails.
pub async fn run_add_command(args: &AddArgs, session: &mut Session) -> Result<()> {
    session.ensure_repo()?;
    let printer = session.printer();

    if args.all {
        stage_all(session).await?;
        printer.success("Added all changes");
        session.record("add", "Added all files");
        return Ok(());
    }

    if !args.files.is_empty() {
        let paths: Vec<&str> = args.files.iter().map(String::as_str).collect();
        stage_paths(session, &paths).await?;
        printer.success(format!("Added {} file(s)", paths.len()));
        session.record("add", format!("Added {} file(s)", paths.len()));
        return Ok(());
    }

    let files = query::changed_files(session.runner(), session.workdir()).await?;
    if files.is_empty() {
        printer.info("No changes to add!");
        return Ok(());
    }
    println!("Found {} changed file(s)", files.len());

    let outcome = select_files(session, &files).await?;
    if outcome.is_cancelled() {
        printer.info("Cancelled, nothing staged");
        return Ok(());
    }

    let chosen = chosen_files(&files, &outcome);
    if chosen.is_empty() {
        printer.info("No files selected");
        return Ok(());
    }

    printer.working(format!("Adding {} file(s)...", chosen.len()));
    stage_paths(session, &chosen).await?;
    printer.success(format!("Added {} file(s)", chosen.len()));
    session.record("add", format!("Added {} file(s)", chosen.len()));
    Ok(())
}
