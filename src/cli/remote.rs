// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote command arguments.
//!
//! ```text
//! remote [list]            remotes with URLs, default marked
//! remote add NAME URL      validate, git remote add
//! remote remove NAME       git remote remove
//! remote set-url NAME URL  validate, git remote set-url
//! remote default NAME      save as defaults.remote
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `remote` command.
#[derive(Debug, Clone, Args)]
pub struct RemoteArgs {
    /// Remote subcommand [default: list].
    #[command(subcommand)]
    pub subcommand: Option<RemoteSubcommand>,
}

/// Remote subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RemoteSubcommand {
    /// Lists remotes.
    #[command(visible_alias = "ls")]
    List,

    /// Adds a remote.
    Add(RemoteUrlArgs),

    /// Removes a remote.
    #[command(visible_alias = "rm")]
    Remove(RemoteNameArgs),

    /// Changes the URL of a remote.
    #[command(name = "set-url")]
    SetUrl(RemoteUrlArgs),

    /// Makes a remote the default push target.
    Default(RemoteNameArgs),
}

/// A remote name and URL.
#[derive(Debug, Clone, Args)]
pub struct RemoteUrlArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    #[arg(value_name = "URL")]
    pub url: String,
}

/// A remote name.
#[derive(Debug, Clone, Args)]
pub struct RemoteNameArgs {
    #[arg(value_name = "NAME")]
    pub name: String,
}
