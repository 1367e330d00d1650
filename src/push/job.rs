// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push specification and per-remote jobs.
//!
//! ```text
//! PushSpec { branch, flags }  x  [remote, ...]
//!                 |
//!                 v
//! PushJob { index, remote, branch, flags }
//!                 |
//!                 v
//! git push [--force] [--tags] [--set-upstream] [--dry-run] <remote> <branch>
//! ```

use std::path::Path;
use std::time::Duration;

use bitflags::bitflags;

use crate::core::runner::CommandRequest;
use crate::error::PushError;
use crate::git::validate::validate_branch_name;

bitflags! {
    /// Options applied to every job of a push.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PushFlags: u8 {
        /// Overwrite the remote branch (`--force`).
        const FORCE = 0x01;
        /// Push tags as well (`--tags`).
        const TAGS = 0x02;
        /// Record the remote as upstream (`--set-upstream`).
        const SET_UPSTREAM = 0x04;
        /// Ask each remote what would happen (`git push --dry-run`).
        const REMOTE_CHECK = 0x08;
    }
}

/// What to push, independent of where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSpec {
    branch: String,
    flags: PushFlags,
}

impl PushSpec {
    #[must_use]
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            flags: PushFlags::empty(),
        }
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: PushFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub const fn flags(&self) -> PushFlags {
        self.flags
    }

    /// Rejects a malformed branch reference.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::InvalidSpec`] with the reason.
    pub fn validate(&self) -> Result<(), PushError> {
        validate_branch_name(&self.branch).map_err(|message| PushError::InvalidSpec { message })
    }
}

/// One push attempt directed at a single remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushJob {
    index: usize,
    remote: String,
    branch: String,
    flags: PushFlags,
}

impl PushJob {
    /// Creates the job at submission position `index`.
    #[must_use]
    pub fn new(index: usize, remote: impl Into<String>, spec: &PushSpec) -> Self {
        Self {
            index,
            remote: remote.into(),
            branch: spec.branch.clone(),
            flags: spec.flags,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Arguments passed to `git`.
    #[must_use]
    pub fn git_args(&self) -> Vec<String> {
        let mut args = vec!["push".to_string()];
        if self.flags.contains(PushFlags::FORCE) {
            args.push("--force".to_string());
        }
        if self.flags.contains(PushFlags::TAGS) {
            args.push("--tags".to_string());
        }
        if self.flags.contains(PushFlags::SET_UPSTREAM) {
            args.push("--set-upstream".to_string());
        }
        if self.flags.contains(PushFlags::REMOTE_CHECK) {
            args.push("--dry-run".to_string());
        }
        args.push(self.remote.clone());
        args.push(self.branch.clone());
        args
    }

    /// Builds the command request for this job.
    #[must_use]
    pub fn to_request(&self, cwd: &Path, timeout: Option<Duration>) -> CommandRequest {
        CommandRequest::git(self.git_args())
            .with_cwd(cwd)
            .with_timeout(timeout)
    }
}
