// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations.
//!
//! ```text
//! is_git_repo / current_branch / has_*  --> GixBackend --> .git/ (no subprocess)
//! changed_files   --> git status --porcelain -z
//! ahead_behind    --> git rev-list --left-right --count HEAD...@{upstream}
//! git_output      --> CommandRunner, non-zero exit -> GitError::CommandFailed
//! ```

use std::path::Path;

use crate::core::runner::{CommandRequest, CommandRunner};
use crate::error::{GitError, GwResult};

use super::backend::{GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> GwResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Check for uncommitted changes (staged, unstaged, or untracked files).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or status check fails.
pub fn has_uncommitted_changes(path: &Path) -> GwResult<bool> {
    GixBackend::has_uncommitted_changes(path)
}

/// Check for stashed changes.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or reference lookup fails.
pub fn has_stashed_changes(path: &Path) -> GwResult<bool> {
    GixBackend::has_stashed_changes(path)
}

/// Runs `git <args>` in `cwd` and returns stdout without the trailing newline.
///
/// # Errors
///
/// Returns an `ExecutionFault` if git cannot start, or
/// `GitError::CommandFailed` if it exits non-zero.
pub async fn git_output(runner: &dyn CommandRunner, cwd: &Path, args: &[&str]) -> GwResult<String> {
    let request = CommandRequest::git(args.iter().copied()).with_cwd(cwd);
    let outcome = runner.run(&request).await?;
    if !outcome.succeeded() {
        return Err(GitError::CommandFailed {
            command: request.command_line(),
            message: outcome.failure_message(),
        }
        .into());
    }
    Ok(outcome.stdout().trim_end_matches(['\n', '\r']).to_string())
}

/// One entry of `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Two-letter `XY` status code (index, worktree).
    pub status: String,
    /// Path relative to the repository root (the new path for renames).
    pub path: String,
}

impl ChangedFile {
    #[must_use]
    pub fn is_untracked(&self) -> bool {
        self.status == "??"
    }

    /// Whether the change is already staged in the index.
    #[must_use]
    pub fn is_staged(&self) -> bool {
        self.status
            .chars()
            .next()
            .is_some_and(|x| x != ' ' && x != '?')
    }
}

/// Parses `git status --porcelain -z` output.
///
/// Renames and copies are followed by an extra entry holding the source
/// path, which is skipped.
#[must_use]
pub fn parse_porcelain_z(output: &str) -> Vec<ChangedFile> {
    let mut files = Vec::new();
    let mut entries = output.split('\0').filter(|e| !e.is_empty());

    while let Some(entry) = entries.next() {
        let (Some(status), Some(path)) = (entry.get(..2), entry.get(3..)) else {
            continue;
        };
        if status.starts_with(['R', 'C']) {
            entries.next();
        }
        files.push(ChangedFile {
            status: status.to_string(),
            path: path.to_string(),
        });
    }

    files
}

/// Lists changed files in the work tree, in git's order.
///
/// # Errors
///
/// Returns an error if `git status` cannot run or fails.
pub async fn changed_files(runner: &dyn CommandRunner, cwd: &Path) -> GwResult<Vec<ChangedFile>> {
    let output = git_output(runner, cwd, &["status", "--porcelain", "-z"]).await?;
    Ok(parse_porcelain_z(&output))
}

/// Commits ahead of and behind the upstream branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AheadBehind {
    pub ahead: u32,
    pub behind: u32,
}

/// Parses `git rev-list --left-right --count` output (`"<ahead>\t<behind>"`).
#[must_use]
pub fn parse_ahead_behind(output: &str) -> Option<AheadBehind> {
    let mut counts = output.split_whitespace().map(str::parse::<u32>);
    match (counts.next(), counts.next(), counts.next()) {
        (Some(Ok(ahead)), Some(Ok(behind)), None) => Some(AheadBehind { ahead, behind }),
        _ => None,
    }
}

/// Returns ahead/behind counts, or `None` when the branch has no upstream.
///
/// # Errors
///
/// Returns an `ExecutionFault` only if git cannot start.
pub async fn ahead_behind(
    runner: &dyn CommandRunner,
    cwd: &Path,
) -> GwResult<Option<AheadBehind>> {
    let request = CommandRequest::git(["rev-list", "--left-right", "--count", "HEAD...@{upstream}"])
        .with_cwd(cwd);
    let outcome = runner.run(&request).await?;
    if !outcome.succeeded() {
        return Ok(None);
    }
    Ok(parse_ahead_behind(outcome.stdout()))
}
