// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status command implementation for gw.
//!
//! ```text
//! gix       current branch, stash presence
//! git       status --porcelain -z, rev-list ahead/behind, log --oneline -5
//!   |
//!   v
//! StatusSnapshot --> render_status() --> stdout
//! ```

use tracing::debug;

use super::session::Session;
use super::ui::Printer;
use crate::error::Result;
use crate::git::query::{self, AheadBehind, ChangedFile};

/// Everything `gw status` shows.
#[derive(Debug, Clone, Default)]
pub struct StatusSnapshot {
    pub branch: Option<String>,
    pub upstream: Option<AheadBehind>,
    pub changes: Vec<ChangedFile>,
    pub has_stash: bool,
    pub recent_commits: Vec<String>,
}

impl StatusSnapshot {
    /// Collects the snapshot for the session's repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub async fn collect(session: &Session) -> Result<Self> {
        let workdir = session.workdir();
        let runner = session.runner();

        let branch = query::current_branch(workdir)?;
        let has_stash = query::has_stashed_changes(workdir)?;
        let changes = query::changed_files(runner, workdir).await?;
        let upstream = query::ahead_behind(runner, workdir).await?;

        // An unborn branch has no log yet
        let recent_commits = match query::git_output(runner, workdir, &["log", "--oneline", "-5"]).await
        {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(e) => {
                debug!(error = %e, "no commits to show");
                Vec::new()
            }
        };

        Ok(Self {
            branch,
            upstream,
            changes,
            has_stash,
            recent_commits,
        })
    }
}

/// Renders the snapshot as display lines.
#[must_use]
pub fn render_status(snapshot: &StatusSnapshot, printer: Printer) -> Vec<String> {
    let mut lines = Vec::new();
    lines.extend(printer.heading("📊 ", "Repository Status", 30));

    match &snapshot.branch {
        Some(branch) => lines.push(format!("{}Current branch: {branch}", printer.icon("🌿 "))),
        None => lines.push(format!("{}HEAD is detached", printer.icon("🌿 "))),
    }
    match snapshot.upstream {
        Some(AheadBehind { ahead, behind }) if ahead > 0 || behind > 0 => {
            lines.push(format!("   ↑ {ahead} commits ahead"));
            lines.push(format!("   ↓ {behind} commits behind"));
        }
        Some(_) => lines.push("   up to date with upstream".to_string()),
        None => lines.push("   no upstream branch".to_string()),
    }

    lines.push(String::new());
    if snapshot.changes.is_empty() {
        lines.push(format!("{}Working tree clean", printer.icon("📝 ")));
    } else {
        lines.push(format!(
            "{}Changes ({}):",
            printer.icon("📝 "),
            snapshot.changes.len()
        ));
        for file in &snapshot.changes {
            lines.push(format!("   {} {}", file.status, file.path));
        }
    }

    if snapshot.has_stash {
        lines.push(String::new());
        lines.push(format!("{}Stashed changes present", printer.icon("📦 ")));
    }

    if !snapshot.recent_commits.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}Recent commits:", printer.icon("📜 ")));
        for commit in &snapshot.recent_commits {
            lines.push(format!("   {commit}"));
        }
    }

    lines
}

/// Main handler for status command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository or git fails.
pub async fn run_status_command(session: &Session) -> Result<()> {
    session.ensure_repo()?;

    let snapshot = StatusSnapshot::collect(session).await?;
    for line in render_status(&snapshot, session.printer()) {
        println!("{line}");
    }
    Ok(())
}
