// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository setup and fetch commands for gw.
//!
//! ```text
//! init [DIR]     validate --remote URL --> git init [DIR]
//!                user.name / user.email from settings --> git config
//!                --remote URL --> git remote add origin URL, defaults.remote = origin
//! clone URL      validate URL --> git clone URL [DIR] (terminal attached)
//! fetch          REMOTE | defaults.remote | first registered | --all
//! ```

use std::path::PathBuf;

use anyhow::bail;
use tracing::debug;

use super::config::update_user_config;
use super::push::fallback_remote;
use super::session::Session;
use crate::cli::repo::{CloneArgs, FetchArgs, InitArgs};
use crate::core::runner::CommandRequest;
use crate::error::Result;
use crate::git::query;
use crate::git::remote::RemoteRegistry;
use crate::git::validate::validate_remote_url;

/// Remote registered by `init --remote`.
pub const INIT_REMOTE: &str = "origin";

/// `git config` calls applying the saved identity to a new repository.
#[must_use]
pub fn identity_config_args(name: &str, email: &str) -> Vec<[String; 3]> {
    [("user.name", name), ("user.email", email)]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| ["config".to_string(), key.to_string(), value.to_string()])
        .collect()
}

/// `git clone` arguments.
#[must_use]
pub fn clone_args(args: &CloneArgs) -> Vec<String> {
    let mut git_args = vec!["clone".to_string(), args.url.clone()];
    git_args.extend(args.directory.iter().cloned());
    git_args
}

/// What `fetch` should contact: `None` means every remote.
///
/// # Errors
///
/// Returns an error for an unknown remote or when none is configured.
pub fn fetch_target(
    args: &FetchArgs,
    registry: &RemoteRegistry,
    default: &str,
) -> Result<Option<String>> {
    if args.all {
        return Ok(None);
    }
    match &args.remote {
        Some(name) if registry.contains(name) => Ok(Some(name.clone())),
        Some(name) => bail!("unknown remote: {name}"),
        None => match fallback_remote(registry, default) {
            Some(name) => Ok(Some(name)),
            None => bail!("no remotes configured; add one with `gw remote add NAME URL`"),
        },
    }
}

/// Main handler for init command.
///
/// # Errors
///
/// Returns an error if the remote URL is invalid, git fails, or the settings
/// file cannot be written.
pub async fn run_init_command(args: &InitArgs, session: &mut Session) -> Result<()> {
    if let Some(url) = &args.remote {
        validate_remote_url(url)?;
    }
    let printer = session.printer();
    let target: PathBuf = args
        .directory
        .as_ref()
        .map_or_else(|| session.workdir().to_path_buf(), |dir| session.workdir().join(dir));

    printer.working("Initializing repository...");
    let target_arg = target.display().to_string();
    let init_args = ["init", target_arg.as_str()];
    query::git_output(session.runner(), session.workdir(), &init_args).await?;

    let user = &session.config().user;
    let identity = identity_config_args(&user.name, &user.email);
    if !identity.is_empty() {
        for call in &identity {
            let call: Vec<&str> = call.iter().map(String::as_str).collect();
            query::git_output(session.runner(), &target, &call).await?;
        }
        printer.info("Applied your saved identity");
    }

    if let Some(url) = &args.remote {
        query::git_output(
            session.runner(),
            &target,
            &["remote", "add", INIT_REMOTE, url.as_str()],
        )
        .await?;
        update_user_config(session, |config| config.set_key("defaults.remote", INIT_REMOTE))?;
        printer.success(format!("Remote {INIT_REMOTE} added"));
    }

    printer.success("Repository initialized successfully!");
    session.record("init", format!("Initialized repository in {}", target.display()));
    Ok(())
}

/// Main handler for clone command.
///
/// git runs attached to the terminal so progress and credential prompts work.
///
/// # Errors
///
/// Returns an error if the URL is invalid or git fails.
pub async fn run_clone_command(args: &CloneArgs, session: &mut Session) -> Result<()> {
    validate_remote_url(&args.url)?;
    let printer = session.printer();

    printer.working(format!("Cloning repository: {}", args.url));
    let request = CommandRequest::git(clone_args(args))
        .with_interactive(true)
        .with_cwd(session.workdir());
    let outcome = session.runner().run(&request).await?;
    if !outcome.succeeded() {
        bail!("clone failed: {}", outcome.failure_message());
    }

    printer.success("Repository cloned successfully!");
    session.record("clone", format!("Cloned {}", args.url));
    Ok(())
}

/// Main handler for fetch command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository, the remote is
/// unknown, or git fails.
pub async fn run_fetch_command(args: &FetchArgs, session: &mut Session) -> Result<()> {
    session.ensure_repo()?;
    let printer = session.printer();
    let registry = RemoteRegistry::load(session.runner(), session.workdir()).await?;
    let target = fetch_target(args, &registry, &session.config().defaults.remote)?;
    debug!(target = ?target, "fetch");

    let (git_args, label) = match &target {
        Some(remote) => (vec!["fetch", remote.as_str()], remote.clone()),
        None => (vec!["fetch", "--all"], "all remotes".to_string()),
    };

    printer.working(format!("Fetching from {label}..."));
    query::git_output(session.runner(), session.workdir(), &git_args).await?;
    printer.success(format!("Fetched from {label} successfully!"));
    session.record("fetch", format!("Fetched from {label}"));
    Ok(())
}
