// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                              menu / status / add / commit
//!                              push / sync / fetch / diff / log
//!                              init / clone / remote / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |    config      history    |
//!              |  layered TOML  JSON log   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              push         git      select
//!          coordinator   gix/CLI   key loop +
//!          seq / par    remotes    crossterm
//!
//!   +-----------------------------------------+
//!   |  core   process, CommandRunner          |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod history;
pub mod logging;
pub mod push;
pub mod select;
