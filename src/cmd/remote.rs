// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote management commands for gw.
//!
//! ```text
//! list            git remote -v, default marked
//! add NAME URL    validate --> git remote add   (first remote becomes default)
//! remove NAME     git remote remove             (default moves to next remote)
//! set-url NAME U  validate --> git remote set-url
//! default NAME    defaults.remote = NAME        (user settings file)
//! ```

use anyhow::bail;

use super::config::update_user_config;
use super::session::Session;
use super::ui::Printer;
use crate::cli::remote::{RemoteArgs, RemoteSubcommand};
use crate::config::types::DefaultsConfig;
use crate::error::Result;
use crate::git::remote::{self as git_remote, RemoteRegistry};

/// Renders the remote list with the default marked.
#[must_use]
pub fn render_remotes(registry: &RemoteRegistry, default: &str, printer: Printer) -> Vec<String> {
    if registry.is_empty() {
        return vec!["No remotes configured".to_string()];
    }
    let mut lines = vec![format!("{}Remotes:", printer.icon("🌐 "))];
    for target in registry.iter() {
        let marker = if target.name() == default {
            " (default)"
        } else {
            ""
        };
        lines.push(format!("  {}: {}{marker}", target.name(), target.url()));
    }
    lines
}

/// Default remote after `removed` is gone: unchanged unless it was the
/// default, then the first remaining remote or the built-in default.
#[must_use]
pub fn default_after_removal(registry: &RemoteRegistry, removed: &str, current: &str) -> String {
    if current != removed {
        return current.to_string();
    }
    registry
        .names()
        .find(|name| *name != removed)
        .map_or_else(|| DefaultsConfig::default().remote, str::to_string)
}

fn save_default_remote(session: &mut Session, name: &str) -> Result<()> {
    update_user_config(session, |config| config.set_key("defaults.remote", name))
}

/// Main handler for remote command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository, the name or URL is
/// invalid, the remote does not exist (or already exists for `add`), git
/// fails, or the settings file cannot be written.
pub async fn run_remote_command(args: &RemoteArgs, session: &mut Session) -> Result<()> {
    session.ensure_repo()?;
    let printer = session.printer();
    let registry = RemoteRegistry::load(session.runner(), session.workdir()).await?;

    match args.subcommand.as_ref().unwrap_or(&RemoteSubcommand::List) {
        RemoteSubcommand::List => {
            let default = &session.config().defaults.remote;
            for line in render_remotes(&registry, default, printer) {
                println!("{line}");
            }
        }
        RemoteSubcommand::Add(add) => {
            git_remote::add_remote(session.runner(), session.workdir(), &registry, &add.name, &add.url)
                .await?;
            printer.success(format!("Added remote '{}': {}", add.name, add.url));
            session.record("remote", format!("Added remote {}", add.name));

            if registry.is_empty() {
                save_default_remote(session, &add.name)?;
                printer.info(format!("Default remote set to: {}", add.name));
            }
        }
        RemoteSubcommand::Remove(remove) => {
            git_remote::remove_remote(session.runner(), session.workdir(), &registry, &remove.name)
                .await?;
            printer.success(format!("Removed remote '{}'", remove.name));
            session.record("remote", format!("Removed remote {}", remove.name));

            let current = session.config().defaults.remote.clone();
            let next = default_after_removal(&registry, &remove.name, &current);
            if next != current {
                save_default_remote(session, &next)?;
                printer.info(format!("Default remote set to: {next}"));
            }
        }
        RemoteSubcommand::SetUrl(set_url) => {
            git_remote::set_remote_url(
                session.runner(),
                session.workdir(),
                &registry,
                &set_url.name,
                &set_url.url,
            )
            .await?;
            printer.success(format!("Updated '{}' to {}", set_url.name, set_url.url));
            session.record("remote", format!("Changed URL of {}", set_url.name));
        }
        RemoteSubcommand::Default(target) => {
            if !registry.contains(&target.name) {
                bail!("unknown remote: {}", target.name);
            }
            save_default_remote(session, &target.name)?;
            printer.success(format!("Default remote set to: {}", target.name));
        }
    }
    Ok(())
}
