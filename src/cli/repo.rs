// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository setup and fetch arguments.
//!
//! ```text
//! init [DIR] [--remote URL]   git init, apply user.*, add origin
//! clone URL [DIR]             validate URL, git clone
//! fetch [REMOTE] | --all      git fetch without merging
//! ```

use std::path::PathBuf;

use clap::Args;

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Directory to initialize [default: working directory].
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Register URL as `origin` and make it the default remote.
    #[arg(long, value_name = "URL")]
    pub remote: Option<String>,
}

/// Arguments for the `clone` command.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// Repository to clone.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Target directory [default: derived by git].
    #[arg(value_name = "DIR")]
    pub directory: Option<String>,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Default, Args)]
pub struct FetchArgs {
    /// Remote to fetch from [default: defaults.remote].
    #[arg(value_name = "REMOTE", conflicts_with = "all")]
    pub remote: Option<String>,

    /// Fetch every remote.
    #[arg(long)]
    pub all: bool,
}
