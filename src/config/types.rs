// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config
//!   [user]      name, email
//!   [defaults]  branch = "main", remote = "origin"
//!   [push]      auto_push, parallel, max_concurrency = 5, timeout_secs
//!   [ui]        show_emoji, use_colors
//!   [history]   max_entries = 20
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::push::{DEFAULT_MAX_CONCURRENCY, PushMode};

/// Identity shown by `gw config show`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    pub name: String,
    pub email: String,
}

/// Fallback branch and remote when a command does not name them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Branch pushed when HEAD is detached and no `-b` is given.
    pub branch: String,
    /// Remote pushed to when no remote is named.
    pub remote: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            branch: "main".to_string(),
            remote: "origin".to_string(),
        }
    }
}

/// Push behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushConfig {
    /// `gw commit` pushes afterwards without `--push`.
    pub auto_push: bool,
    /// Push to several remotes concurrently.
    pub parallel: bool,
    /// Upper bound on simultaneous pushes.
    pub max_concurrency: usize,
    /// Per-remote timeout; unset means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            auto_push: true,
            parallel: true,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_secs: None,
        }
    }
}

impl PushConfig {
    /// Mode used when the command line does not force one.
    #[must_use]
    pub const fn mode(&self) -> PushMode {
        if self.parallel {
            PushMode::Parallel {
                max_concurrency: self.max_concurrency,
            }
        } else {
            PushMode::Sequential
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Presentation toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub show_emoji: bool,
    pub use_colors: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_emoji: true,
            use_colors: true,
        }
    }
}

/// Command history retention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: 20 }
    }
}
