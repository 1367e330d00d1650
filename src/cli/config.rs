// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config and history command arguments.

use clap::{Args, Subcommand};

/// Arguments for the `config` command.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config subcommand [default: show].
    #[command(subcommand)]
    pub subcommand: Option<ConfigSubcommand>,
}

/// Config subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Lists all settings and their effective values.
    Show,

    /// Lists the settings files that were loaded.
    Files,

    /// Sets a value in the user settings file, e.g. `push.parallel false`.
    Set {
        #[arg(value_name = "KEY")]
        key: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Flips a boolean setting, e.g. `ui.show_emoji`.
    Toggle {
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// Only show entries containing TERM (case-insensitive).
    #[arg(short = 's', long, value_name = "TERM")]
    pub search: Option<String>,

    /// Maximum entries to show.
    #[arg(short = 'n', long, value_name = "N", default_value_t = 20)]
    pub limit: usize,
}
