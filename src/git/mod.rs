// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          Public API
//!   query.rs   remote.rs   validate.rs
//!      |    \      |
//!      v     v     v
//!  GixBackend   dyn CommandRunner
//!  (gix, read)  (git CLI: status, rev-list,
//!  .is_repo      remote -v, remote add/...)
//!  .branch
//!  .dirty
//!  .stashed
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! Everything that mutates the repository or needs porcelain output goes
//! through the [`CommandRunner`](crate::core::runner::CommandRunner).

pub mod backend;
pub mod query;
pub mod remote;
pub mod validate;

#[cfg(test)]
mod tests;
