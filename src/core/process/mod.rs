// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .maybe_timeout() .capture_output()
//!   .run()
//!       --> tokio::process::Command (own process group unless interactive)
//!           drain stdout/stderr concurrently
//!           kill the group on timeout, keep partial output
//!       --> ProcessOutput { exit_code, stdout, stderr, timed_out, duration }
//! ```

pub mod builder;
mod io;
mod runner;
