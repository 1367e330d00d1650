// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input validation for branch names, remote names and remote URLs.
//!
//! ```text
//! branch:  non-empty, no ' ' ~ ^ : ? * [ \ ..
//!          no leading '-', no trailing '.' or '.lock'
//! url:     http(s)://  git@  ssh://  file://  /abs  ../rel
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RemoteError;

/// Substrings git refuses inside a ref name.
const FORBIDDEN_IN_BRANCH: &[&str] = &[" ", "~", "^", ":", "?", "*", "[", "\\", ".."];

static REMOTE_URL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(https?://|git@|ssh://|file://|/|\.\.)").ok()
});

/// Checks a branch name, returning the reason it is rejected.
///
/// # Errors
///
/// Returns a human-readable reason when the name is not acceptable.
pub fn validate_branch_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("branch name must not be empty".to_string());
    }
    if let Some(bad) = FORBIDDEN_IN_BRANCH.iter().find(|bad| name.contains(**bad)) {
        return Err(format!("branch name '{name}' must not contain '{bad}'"));
    }
    if name.starts_with('-') {
        return Err(format!("branch name '{name}' must not start with '-'"));
    }
    if name.ends_with('.') || name.ends_with(".lock") {
        return Err(format!("branch name '{name}' must not end with '.' or '.lock'"));
    }
    Ok(())
}

#[must_use]
pub fn is_valid_branch_name(name: &str) -> bool {
    validate_branch_name(name).is_ok()
}

/// Checks a remote URL against the accepted schemes.
///
/// # Errors
///
/// Returns [`RemoteError::InvalidUrl`] for anything else.
pub fn validate_remote_url(url: &str) -> Result<(), RemoteError> {
    let matches = REMOTE_URL
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(url));
    if matches {
        Ok(())
    } else {
        Err(RemoteError::InvalidUrl {
            url: url.to_string(),
        })
    }
}

/// Checks a remote name. Git applies ref-name rules to remote names.
///
/// # Errors
///
/// Returns [`RemoteError::EmptyName`] for an empty name and
/// [`RemoteError::InvalidName`] for one git would refuse.
pub fn validate_remote_name(name: &str) -> Result<(), RemoteError> {
    if name.is_empty() {
        return Err(RemoteError::EmptyName);
    }
    validate_branch_name(name).map_err(|_| RemoteError::InvalidName {
        name: name.to_string(),
    })
}
