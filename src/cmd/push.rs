// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push and sync command implementation for gw.
//!
//! ```text
//! git remote -v --> RemoteRegistry
//! remotes: named | --all-remotes | defaults.remote | first registered
//! branch:  -b | current branch | defaults.branch
//! --all-remotes without -y: "Push <branch> to ALL <n> remotes? [y/N]"
//!      |
//!      v
//! PushCoordinator (Ctrl+C --> cancel token)
//!      |
//!      v
//! render_report() --> stdout, history, exit status
//! ```

use anyhow::bail;
use tracing::{info, warn};

use super::session::Session;
use super::ui::{Printer, Prompt, StdinPrompt, Tone, confirm};
use crate::cli::push::{PushArgs, SyncArgs};
use crate::error::Result;
use crate::git::query;
use crate::git::remote::RemoteRegistry;
use crate::push::{JobStatus, PushCoordinator, PushReport, PushSpec};

/// Picks the remotes to push to.
///
/// Without explicit names the configured default is used, or the first
/// registered remote when the default does not exist.
#[must_use]
pub fn resolve_remotes(args: &PushArgs, registry: &RemoteRegistry, default: &str) -> Vec<String> {
    if args.all_remotes {
        return registry.names().map(str::to_string).collect();
    }
    if !args.remotes.is_empty() {
        return args.remotes.clone();
    }
    fallback_remote(registry, default).into_iter().collect()
}

/// The configured default if it exists, else the first registered remote.
#[must_use]
pub fn fallback_remote(registry: &RemoteRegistry, default: &str) -> Option<String> {
    if registry.contains(default) {
        Some(default.to_string())
    } else {
        registry.names().next().map(str::to_string)
    }
}

/// Branch to push: explicit, else the checked-out branch, else the default.
///
/// # Errors
///
/// Returns an error if the repository HEAD cannot be read.
pub fn resolve_branch(explicit: Option<&str>, session: &Session) -> Result<String> {
    if let Some(branch) = explicit {
        return Ok(branch.to_string());
    }
    Ok(query::current_branch(session.workdir())?
        .unwrap_or_else(|| session.config().defaults.branch.clone()))
}

/// Question asked before pushing to every remote.
#[must_use]
pub fn push_all_question(branch: &str, count: usize) -> String {
    format!("Push {branch} to ALL {count} remotes?")
}

/// Pushing to every remote is confirmed first, unless `--yes` or a dry run.
#[must_use]
pub const fn needs_confirmation(args: &PushArgs) -> bool {
    args.all_remotes && !args.yes && !args.dry_run
}

/// Asks whether to push to every remote; the default answer is no.
///
/// # Errors
///
/// Returns an error if the remotes or HEAD cannot be read, or the prompt
/// fails.
pub async fn confirm_push_all(
    args: &PushArgs,
    session: &Session,
    prompt: &mut dyn Prompt,
) -> Result<bool> {
    let registry = RemoteRegistry::load(session.runner(), session.workdir()).await?;
    let branch = resolve_branch(args.branch.as_deref(), session)?;
    confirm(prompt, &push_all_question(&branch, registry.len()), false)
}

/// Renders per-remote results and the summary.
#[must_use]
pub fn render_report(report: &PushReport, printer: Printer) -> Vec<String> {
    let mut lines = Vec::new();

    if report.is_plan() {
        lines.push(printer.format(Tone::Info, "Dry run, nothing was pushed. Would run:"));
        for entry in report.entries() {
            if let Some(command) = entry.status().detail() {
                lines.push(format!("  {command}"));
            }
        }
        return lines;
    }

    for entry in report.entries() {
        let remote = entry.remote();
        let line = match entry.status() {
            status if status.is_success() => {
                printer.format(Tone::Success, format!("✓ Pushed to {remote}"))
            }
            JobStatus::Cancelled => {
                printer.format(Tone::Warning, format!("- Skipped {remote} (cancelled)"))
            }
            status => printer.format(
                Tone::Error,
                format!(
                    "✗ Failed to push to {remote} ({}): {}",
                    status.label(),
                    status.detail().unwrap_or_default()
                ),
            ),
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!("Summary: {}", report.summary()));
    let failed = report.failed();
    if !failed.is_empty() {
        lines.push(format!("Failed remotes: {}", failed.join(", ")));
    }
    lines
}

/// Runs a push through the coordinator and prints the report.
///
/// Returns the report so callers can decide on follow-up work.
///
/// # Errors
///
/// Returns an error if the request is invalid or not every remote accepted
/// the push.
pub async fn push_branch(args: &PushArgs, session: &mut Session) -> Result<PushReport> {
    let printer = session.printer();
    let registry = RemoteRegistry::load(session.runner(), session.workdir()).await?;
    if registry.is_empty() {
        bail!("no remotes configured; add one with `gw remote add NAME URL`");
    }

    let config = session.config();
    let remotes = resolve_remotes(args, &registry, &config.defaults.remote);
    let branch = resolve_branch(args.branch.as_deref(), session)?;
    let spec = PushSpec::new(branch.clone()).with_flags(args.flags());
    let push_config = args.resolve(&config.push);

    let coordinator = PushCoordinator::new(registry, session.shared_runner(), session.workdir())
        .with_dry_run(args.dry_run)
        .with_job_timeout(push_config.timeout());

    let cancel_token = coordinator.cancel_token();
    let signal_watch = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, no further pushes will start");
            cancel_token.cancel();
        }
    });

    if !args.dry_run {
        printer.working(format!("Pushing {branch} to {}...", remotes.join(", ")));
    }
    let result = coordinator.push(&remotes, &spec, push_config.mode()).await;
    signal_watch.abort();
    let report = result?;

    for line in render_report(&report, printer) {
        println!("{line}");
    }

    if report.is_plan() {
        return Ok(report);
    }

    let succeeded = report.succeeded();
    if !succeeded.is_empty() {
        let description = format!("Pushed {branch} to {}", succeeded.join(", "));
        session.record("push", description);
    }

    if !report.success() {
        bail!("push failed for: {}", report.failed().join(", "));
    }
    info!(summary = %report.summary(), "Push completed");
    Ok(report)
}

/// Main handler for push command.
///
/// # Errors
///
/// Returns an error if the directory is not a repository, the request is
/// invalid, a push to every remote is not confirmed on a terminal, or any
/// remote did not accept the push.
pub async fn run_push_command(args: &PushArgs, session: &mut Session) -> Result<()> {
    session.ensure_repo()?;
    if needs_confirmation(args) {
        let Some(mut prompt) = StdinPrompt::for_terminal() else {
            bail!("pushing to every remote needs confirmation; pass --yes to skip it");
        };
        if !confirm_push_all(args, session, &mut prompt).await? {
            session.printer().info("Push cancelled");
            return Ok(());
        }
    }
    push_branch(args, session).await.map(|_| ())
}

/// Main handler for sync command: fetch, pull, then push one remote.
///
/// # Errors
///
/// Returns an error if any of the three steps fails.
pub async fn run_sync_command(args: &SyncArgs, session: &mut Session) -> Result<()> {
    session.ensure_repo()?;
    let printer = session.printer();

    let registry = RemoteRegistry::load(session.runner(), session.workdir()).await?;
    let remote = match &args.remote {
        Some(name) if registry.contains(name) => name.clone(),
        Some(name) => bail!("unknown remote: {name}"),
        None => match fallback_remote(&registry, &session.config().defaults.remote) {
            Some(name) => name,
            None => bail!("no remotes configured; add one with `gw remote add NAME URL`"),
        },
    };
    let branch = resolve_branch(args.branch.as_deref(), session)?;

    printer.working(format!("Syncing with {remote}/{branch}"));
    if query::has_uncommitted_changes(session.workdir())? {
        printer.warning("Uncommitted changes present, the pull may stop on conflicts");
    }
    printer.working("Fetching latest changes...");
    query::git_output(session.runner(), session.workdir(), &["fetch", remote.as_str()]).await?;
    printer.working("Pulling latest changes...");
    query::git_output(session.runner(), session.workdir(), &["pull", remote.as_str(), branch.as_str()]).await?;

    printer.working("Pushing local commits...");
    let push_args = PushArgs {
        remotes: vec![remote.clone()],
        branch: Some(branch.clone()),
        sequential: true,
        ..PushArgs::default()
    };
    push_branch(&push_args, session).await?;

    printer.success("Sync completed successfully!");
    session.record("sync", format!("Synced {branch} with {remote}"));
    Ok(())
}

/// Pushes after a commit when remotes exist; used by `commit --push`.
///
/// # Errors
///
/// Returns an error if the push fails.
pub async fn push_after_commit(session: &mut Session) -> Result<()> {
    let registry = RemoteRegistry::load(session.runner(), session.workdir()).await?;
    if registry.is_empty() {
        session.printer().info("No remotes configured, skipping push");
        return Ok(());
    }
    push_branch(&PushArgs::default(), session).await.map(|_| ())
}
