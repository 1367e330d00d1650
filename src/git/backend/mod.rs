// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only git backend.
//!
//! ```text
//! GitQuery (read) --> GixBackend (pure Rust gix)
//! ```

use crate::error::{GitError, GixError, GwResult};
use std::path::Path;

/// Read-only git query operations.
///
/// Implementors inspect repository state without modifying it.
pub trait GitQuery {
    /// Check if path is inside a git repository.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> GwResult<Option<String>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    fn has_uncommitted_changes(path: &Path) -> GwResult<bool>;

    /// Check for stashed changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or reference lookup fails.
    fn has_stashed_changes(path: &Path) -> GwResult<bool>;
}

/// Pure Rust git backend using gix.
pub struct GixBackend;

impl GixBackend {
    fn discover(path: &Path) -> Result<gix::Repository, GitError> {
        gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))
    }
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> GwResult<Option<String>> {
        let repo = Self::discover(path)?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn has_uncommitted_changes(path: &Path) -> GwResult<bool> {
        use gix::status::UntrackedFiles;

        let repo = Self::discover(path)?;

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }

    fn has_stashed_changes(path: &Path) -> GwResult<bool> {
        let repo = Self::discover(path)?;

        // refs/stash exists iff there are stashed changes
        match repo.find_reference("refs/stash") {
            Ok(_) => Ok(true),
            Err(gix::reference::find::existing::Error::NotFound { name: _ }) => Ok(false),
            Err(e) => Err(GitError::Gix(GixError::Head(e)).into()),
        }
    }
}
