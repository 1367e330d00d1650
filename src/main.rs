// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Session::open --> Command Dispatch
//!   Status | Add | Commit | Push | Sync | Fetch | Diff | Show | Log
//!   Init | Clone | Remote | Config | History
//!   (none) --> main menu when stdin is a terminal
//! ```

use std::process::ExitCode;

use gw_rs::cli::global::GlobalOptions;
use gw_rs::cli::{self, Command};
use gw_rs::cmd::add::run_add_command;
use gw_rs::cmd::commit::run_commit_command;
use gw_rs::cmd::config::run_config_command;
use gw_rs::cmd::history::run_history_command;
use gw_rs::cmd::menu::run_menu;
use gw_rs::cmd::push::{run_push_command, run_sync_command};
use gw_rs::cmd::remote::run_remote_command;
use gw_rs::cmd::repo::{run_clone_command, run_fetch_command, run_init_command};
use gw_rs::cmd::session::Session;
use gw_rs::cmd::status::run_status_command;
use gw_rs::cmd::ui::StdinPrompt;
use gw_rs::cmd::view::{run_diff_command, run_log_command, run_show_command};
use gw_rs::logging::init_logging;
use gw_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_show_timestamps(false)
        .with_ansi(!global.no_color)
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(command) => match Session::open(&cli.global) {
            Ok(mut session) => run_with_session(command, &mut session).await,
            Err(e) => Err(e),
        },
        None => match StdinPrompt::for_terminal() {
            Some(mut prompt) => match Session::open(&cli.global) {
                Ok(mut session) => run_menu(&mut session, &mut prompt).await,
                Err(e) => Err(e),
            },
            None => Err(anyhow::anyhow!(
                "No command specified and stdin is not a terminal for the menu. \
                 Use --help for usage information."
            )),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_with_session(command: &Command, session: &mut Session) -> gw_rs::error::Result<()> {
    match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Status => run_status_command(session).await,
        Command::Add(args) => run_add_command(args, session).await,
        Command::Commit(args) => run_commit_command(args, session).await,
        Command::Push(args) => run_push_command(args, session).await,
        Command::Sync(args) => run_sync_command(args, session).await,
        Command::Fetch(args) => run_fetch_command(args, session).await,
        Command::Diff(args) => run_diff_command(args, session).await,
        Command::Show(args) => run_show_command(args, session).await,
        Command::Log(args) => run_log_command(args, session).await,
        Command::Init(args) => run_init_command(args, session).await,
        Command::Clone(args) => run_clone_command(args, session).await,
        Command::Remote(args) => run_remote_command(args, session).await,
        Command::Config(args) => run_config_command(args, session),
        Command::History(args) => {
            run_history_command(args, session);
            Ok(())
        }
    }
}

fn handle_version_command() {
    println!("gw {}", env!("CARGO_PKG_VERSION"));
}
