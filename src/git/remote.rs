// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote target registry.
//!
//! ```text
//! git remote -v
//!   origin  git@host:a.git (fetch)   --+
//!   origin  git@host:a.git (push)      |--> RemoteRegistry [origin, backup]
//!   backup  /srv/b.git (fetch)       --+    ordered, unique names
//! ```
//!
//! The registry is read-only to the push coordinator. Mutations of the
//! repository's remotes go through `git remote` and the registry is reloaded.

use std::path::Path;

use tracing::debug;

use super::query::git_output;
use super::validate::{validate_remote_name, validate_remote_url};
use crate::core::runner::CommandRunner;
use crate::error::{GwResult, RemoteError};

/// A named destination repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    name: String,
    url: String,
}

impl RemoteTarget {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Ordered set of remotes with unique, non-empty names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteRegistry {
    remotes: Vec<RemoteTarget>,
}

impl RemoteRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remotes: Vec::new(),
        }
    }

    /// Builds a registry from targets, rejecting empty or duplicate names.
    ///
    /// # Errors
    ///
    /// Returns the first [`RemoteError`] encountered.
    pub fn from_targets(targets: impl IntoIterator<Item = RemoteTarget>) -> Result<Self, RemoteError> {
        let mut registry = Self::new();
        for target in targets {
            registry.insert(target)?;
        }
        Ok(registry)
    }

    /// Adds a remote at the end.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::EmptyName`] or [`RemoteError::DuplicateName`].
    pub fn insert(&mut self, target: RemoteTarget) -> Result<(), RemoteError> {
        if target.name.is_empty() {
            return Err(RemoteError::EmptyName);
        }
        if self.contains(&target.name) {
            return Err(RemoteError::DuplicateName { name: target.name });
        }
        self.remotes.push(target);
        Ok(())
    }

    /// Removes a remote by name.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NotFound`] if no such remote exists.
    pub fn remove(&mut self, name: &str) -> Result<RemoteTarget, RemoteError> {
        let index = self
            .remotes
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| RemoteError::NotFound {
                name: name.to_string(),
            })?;
        Ok(self.remotes.remove(index))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RemoteTarget> {
        self.remotes.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remote names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.remotes.iter().map(RemoteTarget::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemoteTarget> {
        self.remotes.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.remotes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    /// Parses `git remote -v` output.
    ///
    /// The fetch URL wins; a push-only line is used when no fetch line exists.
    /// Malformed lines are skipped.
    #[must_use]
    pub fn parse_verbose(output: &str) -> Self {
        let mut registry = Self::new();
        for line in output.lines() {
            let mut parts = line.split_whitespace();
            let (Some(name), Some(url)) = (parts.next(), parts.next()) else {
                continue;
            };
            let kind = parts.next().unwrap_or("(fetch)");
            match registry.remotes.iter_mut().find(|r| r.name == name) {
                Some(existing) if kind == "(fetch)" => existing.url = url.to_string(),
                Some(_) => {}
                None => registry.remotes.push(RemoteTarget::new(name, url)),
            }
        }
        registry
    }

    /// Loads the remotes of the repository at `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be run or `git remote -v` fails.
    pub async fn load(runner: &dyn CommandRunner, cwd: &Path) -> GwResult<Self> {
        let output = git_output(runner, cwd, &["remote", "-v"]).await?;
        let registry = Self::parse_verbose(&output);
        debug!(count = registry.len(), "loaded remotes");
        Ok(registry)
    }
}

/// Adds a remote to the repository after validating name and URL.
///
/// # Errors
///
/// Returns a [`RemoteError`] for invalid input or a duplicate, or a git error.
pub async fn add_remote(
    runner: &dyn CommandRunner,
    cwd: &Path,
    registry: &RemoteRegistry,
    name: &str,
    url: &str,
) -> GwResult<()> {
    validate_remote_name(name)?;
    validate_remote_url(url)?;
    if registry.contains(name) {
        return Err(RemoteError::DuplicateName {
            name: name.to_string(),
        }
        .into());
    }
    git_output(runner, cwd, &["remote", "add", name, url]).await?;
    Ok(())
}

/// Removes a remote from the repository.
///
/// # Errors
///
/// Returns [`RemoteError::NotFound`] for an unknown remote, or a git error.
pub async fn remove_remote(
    runner: &dyn CommandRunner,
    cwd: &Path,
    registry: &RemoteRegistry,
    name: &str,
) -> GwResult<()> {
    if !registry.contains(name) {
        return Err(RemoteError::NotFound {
            name: name.to_string(),
        }
        .into());
    }
    git_output(runner, cwd, &["remote", "remove", name]).await?;
    Ok(())
}

/// Changes the URL of an existing remote.
///
/// # Errors
///
/// Returns a [`RemoteError`] for an unknown remote or invalid URL, or a git error.
pub async fn set_remote_url(
    runner: &dyn CommandRunner,
    cwd: &Path,
    registry: &RemoteRegistry,
    name: &str,
    url: &str,
) -> GwResult<()> {
    validate_remote_url(url)?;
    if !registry.contains(name) {
        return Err(RemoteError::NotFound {
            name: name.to_string(),
        }
        .into());
    }
    git_output(runner, cwd, &["remote", "set-url", name, url]).await?;
    Ok(())
}
