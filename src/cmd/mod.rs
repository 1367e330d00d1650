// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> Session::open --> cmd::run_* handlers
//!   status, add, commit, push, sync, fetch, diff, show, log,
//!   init, clone, remote, config, history
//! no command --> menu::run_menu --> MenuAction --> the same handlers
//!
//! every handler: ensure_repo (where needed) --> git via CommandRunner
//!                --> Printer output --> Session::record (history)
//! ```

pub mod add;
pub mod commit;
pub mod config;
pub mod history;
pub mod menu;
pub mod push;
pub mod remote;
pub mod repo;
pub mod session;
pub mod status;
pub mod ui;
pub mod view;

#[cfg(test)]
mod tests;
