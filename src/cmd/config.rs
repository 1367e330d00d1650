// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for gw.
//!
//! `set` and `toggle` edit the user settings file only; the session then
//! reloads the layered view so later output reflects local overrides.

use anyhow::Context;
use tracing::info;

use super::session::Session;
use crate::cli::config::{ConfigArgs, ConfigSubcommand};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Display current configuration options.
pub fn run_options_command(session: &Session) {
    for line in session.config().format_options() {
        println!("{line}");
    }
    println!();
    println!("Settings file: {}", session.config_path().display());
}

/// Display loaded configuration files.
pub fn run_files_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}

/// Applies `edit` to the user settings file, saves it and refreshes the
/// session's effective config.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, `edit` fails, or
/// the layered config no longer loads.
pub fn update_user_config<T>(
    session: &mut Session,
    edit: impl FnOnce(&mut Config) -> std::result::Result<T, ConfigError>,
) -> Result<T> {
    let path = session.config_path().to_path_buf();
    let mut user = Config::load_file(&path)?;
    let value = edit(&mut user)?;
    user.save(&path)?;
    info!(path = %path.display(), "Saved settings");

    let effective = Config::layered(&path, session.workdir())
        .build()
        .context("failed to reload settings")?;
    session.set_config(effective);
    Ok(value)
}

/// Main handler for config command.
///
/// # Errors
///
/// Returns an error for unknown keys, unparsable values, or I/O failures on
/// the settings file.
pub fn run_config_command(args: &ConfigArgs, session: &mut Session) -> Result<()> {
    match args.subcommand.as_ref().unwrap_or(&ConfigSubcommand::Show) {
        ConfigSubcommand::Show => run_options_command(session),
        ConfigSubcommand::Files => run_files_command(session.loaded_files()),
        ConfigSubcommand::Set { key, value } => {
            update_user_config(session, |config| config.set_key(key, value))?;
            session.printer().success(format!("{key} set to {value}"));
        }
        ConfigSubcommand::Toggle { key } => {
            let enabled = update_user_config(session, |config| config.toggle_key(key))?;
            let state = if enabled { "enabled" } else { "disabled" };
            session.printer().success(format!("{key} {state}"));
        }
    }
    Ok(())
}
