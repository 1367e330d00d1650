// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive main menu, shown when `gw` runs without a command.
//!
//! ```text
//! loop
//!   MenuHeader::collect --> render_menu --> "Enter your choice (1-N):"
//!        |                                         |
//!        |                       parse_choice ---- invalid --> error, ask again
//!        v                                         v
//!   menu_actions(in_repo)                  run_action(MenuAction)
//!                                                  |
//!                         handler error --> printed, loop continues
//!                         "Press Enter to continue..."
//! Exit or end of input --> Goodbye
//! ```

use std::path::Path;

use clap::CommandFactory;
use tracing::debug;

use super::add::run_add_command;
use super::commit::run_commit_command;
use super::config::run_config_command;
use super::history::run_history_command;
use super::push::{confirm_push_all, push_branch, run_push_command, run_sync_command};
use super::remote::run_remote_command;
use super::repo::{run_clone_command, run_fetch_command, run_init_command};
use super::session::Session;
use super::status::run_status_command;
use super::ui::{Printer, Prompt, ask_value, confirm};
use super::view::{run_diff_command, run_log_command};
use crate::cli::Cli;
use crate::cli::config::{ConfigArgs, HistoryArgs};
use crate::cli::push::{PushArgs, SyncArgs};
use crate::cli::remote::RemoteArgs;
use crate::cli::repo::{CloneArgs, FetchArgs, InitArgs};
use crate::cli::stage::{AddArgs, CommitArgs};
use crate::cli::view::{DiffArgs, LogArgs};
use crate::error::Result;
use crate::git::query::{self, AheadBehind};

const MENU_WIDTH: usize = 50;
const SEARCH_LIMIT: usize = 20;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Status,
    AddFiles,
    Commit,
    Sync,
    Push,
    PushAll,
    ViewChanges,
    ViewHistory,
    Fetch,
    Remotes,
    SearchHistory,
    Init,
    Clone,
    Configuration,
    Help,
    Exit,
}

impl MenuAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Status => "Show Status",
            Self::AddFiles => "Add Files",
            Self::Commit => "Quick Commit",
            Self::Sync => "Sync (Pull & Push)",
            Self::Push => "Push",
            Self::PushAll => "Push to All Remotes",
            Self::ViewChanges => "View Changes",
            Self::ViewHistory => "View History",
            Self::Fetch => "Fetch",
            Self::Remotes => "Remote Management",
            Self::SearchHistory => "Search History",
            Self::Init => "Initialize Repository",
            Self::Clone => "Clone Repository",
            Self::Configuration => "Configuration",
            Self::Help => "Help",
            Self::Exit => "Exit",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Status => "📊 ",
            Self::AddFiles => "➕ ",
            Self::Commit => "💾 ",
            Self::Sync => "🔄 ",
            Self::Push => "📤 ",
            Self::PushAll => "🌐 ",
            Self::ViewChanges => "📋 ",
            Self::ViewHistory => "📜 ",
            Self::Fetch => "📥 ",
            Self::Remotes => "🔗 ",
            Self::SearchHistory => "🔍 ",
            Self::Init => "🎯 ",
            Self::Clone => "📦 ",
            Self::Configuration => "⚙️ ",
            Self::Help => "❓ ",
            Self::Exit => "🚪 ",
        }
    }
}

/// Actions offered inside or outside a repository.
#[must_use]
pub fn menu_actions(in_repo: bool) -> Vec<MenuAction> {
    let mut actions = if in_repo {
        vec![
            MenuAction::Status,
            MenuAction::AddFiles,
            MenuAction::Commit,
            MenuAction::Sync,
            MenuAction::Push,
            MenuAction::PushAll,
            MenuAction::ViewChanges,
            MenuAction::ViewHistory,
            MenuAction::Fetch,
            MenuAction::Remotes,
            MenuAction::SearchHistory,
        ]
    } else {
        vec![MenuAction::Init, MenuAction::Clone]
    };
    actions.extend([MenuAction::Configuration, MenuAction::Help, MenuAction::Exit]);
    actions
}

/// Repository summary above the menu.
#[derive(Debug, Clone, Default)]
pub struct MenuHeader {
    pub directory: String,
    pub in_repo: bool,
    pub branch: Option<String>,
    pub upstream: Option<AheadBehind>,
    pub changes: usize,
    pub has_stash: bool,
}

impl MenuHeader {
    /// Reads the header for the session's working directory.
    ///
    /// Repository details that cannot be read are left out.
    pub async fn collect(session: &Session) -> Self {
        let workdir = session.workdir();
        let mut header = Self {
            directory: directory_name(workdir),
            in_repo: query::is_git_repo(workdir),
            ..Self::default()
        };
        if !header.in_repo {
            return header;
        }

        match query::current_branch(workdir) {
            Ok(branch) => header.branch = branch,
            Err(e) => debug!(error = %e, "menu header: no branch"),
        }
        header.has_stash = query::has_stashed_changes(workdir).unwrap_or_default();
        match query::changed_files(session.runner(), workdir).await {
            Ok(files) => header.changes = files.len(),
            Err(e) => debug!(error = %e, "menu header: no status"),
        }
        header.upstream = query::ahead_behind(session.runner(), workdir)
            .await
            .ok()
            .flatten();
        header
    }
}

fn directory_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Renders the header and numbered actions.
#[must_use]
pub fn render_menu(header: &MenuHeader, actions: &[MenuAction], printer: Printer) -> Vec<String> {
    let rule = "=".repeat(MENU_WIDTH);
    let mut lines = vec![rule.clone()];
    lines.push(format!("{}Interactive Git Wrapper", printer.icon("🚀 ")));
    lines.push(rule.clone());
    lines.push(format!("{}Directory: {}", printer.icon("📁 "), header.directory));
    let status = if header.in_repo {
        format!("{}Git Repository", printer.icon("🟢 "))
    } else {
        format!("{}Not a Git Repository", printer.icon("🔴 "))
    };
    lines.push(format!("{}Status: {status}", printer.icon("📊 ")));
    lines.push(rule);

    if header.in_repo {
        let branch = header.branch.as_deref().unwrap_or("(detached)");
        lines.push(format!("{}Current Branch: {branch}", printer.icon("🌿 ")));
        if let Some(AheadBehind { ahead, behind }) = header.upstream
            && (ahead > 0 || behind > 0)
        {
            lines.push(format!("   ↑ {ahead} ahead, ↓ {behind} behind"));
        }
        if header.changes > 0 {
            lines.push(format!(
                "{}Uncommitted Changes: {} files",
                printer.icon("📝 "),
                header.changes
            ));
        } else {
            lines.push(format!("{}Working Directory: Clean", printer.icon("📝 ")));
        }
        if header.has_stash {
            lines.push(format!("{}Stashed changes present", printer.icon("📦 ")));
        }
        lines.push("-".repeat(MENU_WIDTH));
    }

    lines.extend(actions.iter().enumerate().map(|(i, action)| {
        format!("  {}. {}{}", i + 1, printer.icon(action.icon()), action.label())
    }));
    lines
}

/// Parses a 1-based menu number into an index.
#[must_use]
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}

/// Runs the menu until Exit or end of input.
///
/// # Errors
///
/// Returns an error only if the prompt itself fails; command failures are
/// printed and the menu continues.
pub async fn run_menu(session: &mut Session, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        let printer = session.printer();
        let header = MenuHeader::collect(session).await;
        let actions = menu_actions(header.in_repo);
        println!();
        for line in render_menu(&header, &actions, printer) {
            println!("{line}");
        }

        let Some(answer) = prompt.ask(&format!("\nEnter your choice (1-{}):", actions.len()))?
        else {
            break;
        };
        let choice = parse_choice(&answer, actions.len());
        let Some(action) = choice.and_then(|i| actions.get(i).copied()) else {
            printer.error("Invalid choice!");
            continue;
        };
        if action == MenuAction::Exit {
            break;
        }

        debug!(action = action.label(), "menu");
        if let Err(e) = run_action(action, session, prompt).await {
            printer.error(format!("{e:#}"));
        }
        if prompt.ask("\nPress Enter to continue...")?.is_none() {
            break;
        }
    }

    println!("\n{}Goodbye!", session.printer().icon("👋 "));
    Ok(())
}

/// Runs one menu action with the existing command handlers.
async fn run_action(
    action: MenuAction,
    session: &mut Session,
    prompt: &mut dyn Prompt,
) -> Result<()> {
    let printer = session.printer();
    match action {
        MenuAction::Status => run_status_command(session).await,
        MenuAction::AddFiles => run_add_command(&AddArgs::default(), session).await,
        MenuAction::Commit => {
            let Some(message) = ask_value(prompt, "Commit message", None)? else {
                printer.info("Cancelled");
                return Ok(());
            };
            let all = confirm(prompt, "Stage all changes first?", true)?;
            let args = CommitArgs {
                message: Some(message),
                all,
                ..CommitArgs::default()
            };
            run_commit_command(&args, session).await
        }
        MenuAction::Sync => run_sync_command(&SyncArgs::default(), session).await,
        MenuAction::Push => run_push_command(&PushArgs::default(), session).await,
        MenuAction::PushAll => {
            let args = PushArgs {
                all_remotes: true,
                yes: true,
                ..PushArgs::default()
            };
            if confirm_push_all(&args, session, prompt).await? {
                push_branch(&args, session).await.map(|_| ())
            } else {
                printer.info("Push cancelled");
                Ok(())
            }
        }
        MenuAction::ViewChanges => run_diff_command(&DiffArgs::default(), session).await,
        MenuAction::ViewHistory => run_log_command(&LogArgs::default(), session).await,
        MenuAction::Fetch => run_fetch_command(&FetchArgs::default(), session).await,
        MenuAction::Remotes => run_remote_command(&RemoteArgs { subcommand: None }, session).await,
        MenuAction::SearchHistory => {
            let search = ask_value(prompt, "Search term", None)?;
            let args = HistoryArgs {
                search,
                limit: SEARCH_LIMIT,
            };
            run_history_command(&args, session);
            Ok(())
        }
        MenuAction::Init => {
            let remote = ask_value(prompt, "Remote URL (empty to skip)", None)?;
            run_init_command(&InitArgs { directory: None, remote }, session).await
        }
        MenuAction::Clone => {
            let Some(url) = ask_value(prompt, "Repository URL", None)? else {
                printer.info("Cancelled");
                return Ok(());
            };
            let directory = ask_value(prompt, "Directory (empty for default)", None)?;
            run_clone_command(&CloneArgs { url, directory }, session).await
        }
        MenuAction::Configuration => run_config_command(&ConfigArgs { subcommand: None }, session),
        MenuAction::Help => {
            println!("{}", Cli::command().render_long_help());
            Ok(())
        }
        MenuAction::Exit => Ok(()),
    }
}
