// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               GwError (16 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//! Exec   Push  Remote   Cfg    Git   Select
//!  Box    Box    Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   ExecutionFault NotFound, InvalidWorkingDir, PermissionDenied, Spawn, Wait,
//!                  Aborted
//!   PushError      NoRemotes, DuplicateRemote, UnknownRemote, InvalidSpec
//!   RemoteError    EmptyName, InvalidName, DuplicateName, InvalidUrl, NotFound
//!   ConfigError    UnknownKey, InvalidValue, WriteError, NoConfigDir
//!   GitError       Gix, CommandFailed, NotARepository
//!   SelectError    NotATerminal, Terminal
//! ```
//!
//! A non-zero exit status is never an error: it is a
//! [`CommandOutcome`](crate::core::runner::CommandOutcome) whose `succeeded()`
//! is false. Only failures to start a command are [`ExecutionFault`]s.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GwError`].
pub type GwResult<T> = std::result::Result<T, GwError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum GwError {
    /// An external command could not be started.
    #[error("execution fault: {0}")]
    Execution(#[from] Box<ExecutionFault>),

    /// A push request was rejected before any job started.
    #[error("push error: {0}")]
    Push(#[from] Box<PushError>),

    /// Remote registry error.
    #[error("remote error: {0}")]
    Remote(#[from] Box<RemoteError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Git query error.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Interactive selection error.
    #[error("selection error: {0}")]
    Select(#[from] Box<SelectError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GwError {
                fn from(err: $error) -> Self {
                    GwError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ExecutionFault => Execution,
    PushError => Push,
    RemoteError => Remote,
    ConfigError => Config,
    GitError => Git,
    SelectError => Select,
}

// --- Execution Faults ---

/// The external command could not be started (or waited on) at all.
///
/// Distinct from a command that ran and failed: the remediation differs
/// (install the tool or fix the path, versus fix repository state).
#[derive(Debug, Error)]
pub enum ExecutionFault {
    /// Executable not found.
    #[error("executable not found: '{program}'")]
    NotFound { program: String },

    /// Working directory missing or not a directory.
    #[error("invalid working directory: {}", path.display())]
    InvalidWorkingDir { path: PathBuf },

    /// The executable could not be run due to permissions.
    #[error("permission denied running '{program}'")]
    PermissionDenied { program: String },

    /// Any other spawn failure.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process started but could not be waited on.
    #[error("failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The task driving the command died before reporting an outcome.
    #[error("'{program}' was aborted: {reason}")]
    Aborted { program: String, reason: String },
}

impl ExecutionFault {
    /// Classifies a spawn error by its I/O kind.
    #[must_use]
    pub fn from_spawn_error(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { program },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { program },
            _ => Self::Spawn { program, source },
        }
    }
}

// --- Push Errors ---

/// Request-level push validation failures.
///
/// These are raised before any job is dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PushError {
    /// No remote was requested.
    #[error("no remotes requested")]
    NoRemotes,

    /// The same remote was requested more than once.
    #[error("remote requested more than once: {name}")]
    DuplicateRemote { name: String },

    /// One or more requested remotes are not registered.
    #[error("unknown remote(s): {}", names.join(", "))]
    UnknownRemote { names: Vec<String> },

    /// The push specification is malformed.
    #[error("invalid push specification: {message}")]
    InvalidSpec { message: String },
}

// --- Remote Errors ---

/// Remote registry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Remote name is empty.
    #[error("remote name must not be empty")]
    EmptyName,

    /// Remote name contains characters git refuses.
    #[error("invalid remote name: {name}")]
    InvalidName { name: String },

    /// A remote with this name already exists.
    #[error("remote already exists: {name}")]
    DuplicateName { name: String },

    /// URL does not look like a git remote URL.
    #[error("invalid remote url: {url}")]
    InvalidUrl { url: String },

    /// Remote not registered.
    #[error("remote not found: {name}")]
    NotFound { name: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown setting key.
    #[error("unknown config key '{key}'")]
    UnknownKey { key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to write configuration or history file.
    #[error("failed to write '{}': {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No home directory to place the settings in.
    #[error("unable to resolve a configuration directory")]
    NoConfigDir,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git query errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Path is not inside a work tree.
    #[error("not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// Git command returned a non-zero status where output was required.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Select Errors ---

/// Interactive selector errors.
#[derive(Debug, Error)]
pub enum SelectError {
    /// Input is not attached to a terminal.
    #[error("interactive selection requires a terminal")]
    NotATerminal,

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests;
