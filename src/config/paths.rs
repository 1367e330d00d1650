// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Well-known file locations.
//!
//! ```text
//! <config_dir>/gw/config.toml    user settings (saved by `gw config`)
//! <config_dir>/gw/history.json   command history
//! <workdir>/gw.toml              optional per-repository overrides
//! ```
//!
//! `<config_dir>` is `$XDG_CONFIG_HOME` or `~/.config` on Linux,
//! `~/Library/Application Support` on macOS, `%APPDATA%` on Windows.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Directory name under the platform config directory.
pub const APP_DIR: &str = "gw";

/// User settings file name.
pub const CONFIG_FILE: &str = "config.toml";

/// History file name.
pub const HISTORY_FILE: &str = "history.json";

/// Per-repository settings file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "gw.toml";

fn app_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoConfigDir)
}

/// Default user settings path.
///
/// # Errors
///
/// Returns `ConfigError::NoConfigDir` if the platform has no config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    app_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// History lives next to the settings file it belongs to.
#[must_use]
pub fn history_path_for(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map_or_else(|| PathBuf::from(HISTORY_FILE), |dir| dir.join(HISTORY_FILE))
}

#[must_use]
pub fn local_config_path(workdir: &Path) -> PathBuf {
    workdir.join(LOCAL_CONFIG_FILE)
}
