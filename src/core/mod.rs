// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for running external commands.
//!
//! ```text
//!            core
//!             |
//!     +-------+--------+
//!     |                |
//!     v                v
//!  process          runner
//!     |                |
//!  Builder       CommandRunner trait
//!  Output        SystemRunner, CommandRequest
//!  (spawn, drain, CommandOutcome
//!   timeout)
//! ```

pub mod process;
pub mod runner;
