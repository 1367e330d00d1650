// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gw.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. user config.toml (or --config)
//! 3. local gw.toml (working directory)
//! 4. GW_* env vars
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GW_DEFAULTS__BRANCH=develop     → defaults.branch = "develop"
//! GW_PUSH__PARALLEL=false         → push.parallel = false
//! GW_PUSH__MAX_CONCURRENCY=2      → push.max_concurrency = 2
//! ```
//!
//! # Persistence
//!
//! `gw config set` / `gw config toggle` edit the user file alone (loaded with
//! [`Config::load_file`]) and write it back with [`Config::save`], so values
//! coming from `gw.toml` or the environment are never persisted.

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::git::validate::{validate_branch_name, validate_remote_name};

use loader::ConfigLoader;
use types::{DefaultsConfig, HistoryConfig, PushConfig, UiConfig, UserConfig};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GW";

/// Every key accepted by [`Config::set_key`], in display order.
pub const KEYS: &[&str] = &[
    "user.name",
    "user.email",
    "defaults.branch",
    "defaults.remote",
    "push.auto_push",
    "push.parallel",
    "push.max_concurrency",
    "push.timeout_secs",
    "ui.show_emoji",
    "ui.use_colors",
    "history.max_entries",
];

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity.
    pub user: UserConfig,
    /// Fallback branch and remote.
    pub defaults: DefaultsConfig,
    /// Push behavior.
    pub push: PushConfig,
    /// Presentation toggles.
    pub ui: UiConfig,
    /// History retention.
    pub history: HistoryConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gw_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("/home/me/.config/gw/config.toml")
    ///     .add_toml_file_optional("gw.toml")
    ///     .with_env_prefix("GW")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Standard layering: user file, then `gw.toml` in `workdir`, then `GW_*`.
    #[must_use]
    pub fn layered(user_file: &Path, workdir: &Path) -> ConfigLoader {
        Self::builder()
            .add_toml_file_optional(user_file)
            .add_toml_file_optional(paths::local_config_path(workdir))
            .with_env_prefix(ENV_PREFIX)
    }

    /// Loads one file for editing; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file_optional(path).build()
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unusable default branch or
    /// remote name.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_branch_name(&self.defaults.branch)
            .map_err(|message| invalid("defaults.branch", message))?;
        validate_remote_name(&self.defaults.remote)
            .map_err(|e| invalid("defaults.remote", e.to_string()))?;
        Ok(())
    }

    /// Writes the configuration as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WriteError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> std::result::Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            message: e.to_string(),
        })?;

        let write_error = |source| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, content).map_err(write_error)?;

        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Sets one value from its textual form.
    ///
    /// `push.timeout_secs` accepts `none` (or an empty string) to clear it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for a key not in [`KEYS`], or
    /// `ConfigError::InvalidValue` if the value does not parse or validate.
    pub fn set_key(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        match key {
            "user.name" => self.user.name = value.trim().to_string(),
            "user.email" => self.user.email = value.trim().to_string(),
            "defaults.branch" => {
                validate_branch_name(value).map_err(|message| invalid(key, message))?;
                self.defaults.branch = value.to_string();
            }
            "defaults.remote" => {
                validate_remote_name(value).map_err(|e| invalid(key, e.to_string()))?;
                self.defaults.remote = value.to_string();
            }
            "push.max_concurrency" => self.push.max_concurrency = parse_number(key, value)?,
            "push.timeout_secs" => {
                self.push.timeout_secs = match value.trim() {
                    "" | "none" => None,
                    secs => Some(parse_number(key, secs)?),
                };
            }
            "history.max_entries" => self.history.max_entries = parse_number(key, value)?,
            _ => *self.flag_mut(key)? = parse_bool(key, value)?,
        }
        Ok(())
    }

    /// Flips a boolean setting and returns its new value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for an unknown key, or
    /// `ConfigError::InvalidValue` if the key is not a boolean setting.
    pub fn toggle_key(&mut self, key: &str) -> std::result::Result<bool, ConfigError> {
        let flag = self.flag_mut(key)?;
        *flag = !*flag;
        Ok(*flag)
    }

    fn flag_mut(&mut self, key: &str) -> std::result::Result<&mut bool, ConfigError> {
        match key {
            "push.auto_push" => Ok(&mut self.push.auto_push),
            "push.parallel" => Ok(&mut self.push.parallel),
            "ui.show_emoji" => Ok(&mut self.ui.show_emoji),
            "ui.use_colors" => Ok(&mut self.ui.use_colors),
            known if KEYS.contains(&known) => Err(invalid(known, "not a boolean setting")),
            unknown => Err(ConfigError::UnknownKey {
                key: unknown.to_string(),
            }),
        }
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`; unset values are
    /// shown as `(not set)`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        let or_unset = |s: &str| {
            if s.is_empty() {
                "(not set)".to_string()
            } else {
                s.to_string()
            }
        };

        options.insert("user.name", or_unset(&self.user.name));
        options.insert("user.email", or_unset(&self.user.email));
        options.insert("defaults.branch", self.defaults.branch.clone());
        options.insert("defaults.remote", self.defaults.remote.clone());
        options.insert("push.auto_push", self.push.auto_push.to_string());
        options.insert("push.parallel", self.push.parallel.to_string());
        options.insert(
            "push.max_concurrency",
            self.push.max_concurrency.to_string(),
        );
        options.insert(
            "push.timeout_secs",
            self.push
                .timeout_secs
                .map_or_else(|| "(not set)".to_string(), |s| s.to_string()),
        );
        options.insert("ui.show_emoji", self.ui.show_emoji.to_string());
        options.insert("ui.use_colors", self.ui.use_colors.to_string());
        options.insert("history.max_entries", self.history.max_entries.to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(invalid(key, format!("expected true or false, got '{other}'"))),
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &str,
    value: &str,
) -> std::result::Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, format!("expected a non-negative number, got '{value}'")))
}
