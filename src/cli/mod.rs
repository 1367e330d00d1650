// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gw using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gw [global options]            interactive menu (terminal only)
//! gw [global options] <command>
//! status
//! add [--all] [FILE...]
//! commit [-m MSG] [--all] [--push|--no-push]
//! push [REMOTE...] [--all-remotes [-y]] [-b BRANCH] [flags] [mode]
//! sync [REMOTE] [-b BRANCH]
//! fetch [REMOTE] [--all]
//! diff [--staged] | show [REV] | log [-n N] [--graph|--full]
//! init [DIR] [--remote URL] | clone URL [DIR]
//! remote {list|add|remove|set-url|default}
//! config {show|files|set|toggle}
//! history [--search TERM] [-n N]
//! version
//! ```

pub mod config;
pub mod global;
pub mod push;
pub mod remote;
pub mod repo;
pub mod stage;
pub mod view;


use crate::cli::config::{ConfigArgs, HistoryArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::push::{PushArgs, SyncArgs};
use crate::cli::remote::RemoteArgs;
use crate::cli::repo::{CloneArgs, FetchArgs, InitArgs};
use crate::cli::stage::{AddArgs, CommitArgs};
use crate::cli::view::{DiffArgs, LogArgs, ShowArgs};
use clap::{Parser, Subcommand};

/// Interactive Git Wrapper
///
/// A friendlier front-end for everyday git: interactive staging and pushing
/// to several remotes at once.
#[derive(Debug, Parser)]
#[command(
    name = "gw",
    author,
    version,
    about = "Interactive Git Wrapper",
    long_about = "gw-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  A friendlier front-end for everyday git.\n\n\
                  Run `gw` without a command for the interactive menu.\n\
                  `gw add` opens a selector over the changed files, `gw push\n\
                  origin backup` pushes the current branch to both remotes at\n\
                  once. See `gw <command> --help` for more information about a\n\
                  command.",
    after_help = "SETTINGS:\n\n\
                  Settings are read from <config dir>/gw/config.toml (or --config),\n\
                  then from gw.toml in the working directory, then from GW_*\n\
                  environment variables such as GW_PUSH__PARALLEL=false. `gw config\n\
                  set` and `gw config toggle` only ever write the first file."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Shows branch, upstream state and changed files.
    #[command(visible_alias = "st")]
    Status,

    /// Stages files, interactively by default.
    Add(AddArgs),

    /// Commits staged changes.
    #[command(visible_alias = "ci")]
    Commit(CommitArgs),

    /// Pushes a branch to one or more remotes.
    Push(PushArgs),

    /// Fetches, pulls and pushes one remote.
    Sync(SyncArgs),

    /// Downloads from a remote without merging.
    Fetch(FetchArgs),

    /// Shows unstaged or staged changes.
    Diff(DiffArgs),

    /// Shows a commit [default: HEAD].
    Show(ShowArgs),

    /// Shows recent commits.
    Log(LogArgs),

    /// Creates a repository.
    Init(InitArgs),

    /// Clones a repository.
    Clone(CloneArgs),

    /// Manages remotes.
    Remote(RemoteArgs),

    /// Shows or changes settings.
    Config(ConfigArgs),

    /// Shows recent gw commands.
    History(HistoryArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
