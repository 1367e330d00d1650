// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command execution capability consumed by the rest of the crate.
//!
//! ```text
//! CommandRequest { program, args, cwd, timeout, interactive }
//!        |
//!        v
//!  dyn CommandRunner ---------------------+
//!        |                                |
//!   SystemRunner                     (test fakes)
//!   ProcessBuilder + git env
//!        |
//!        v
//!  Ok(CommandOutcome)  exit code / stdout / stderr / duration / timed_out
//!  Err(ExecutionFault) only when the process never ran
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::future::BoxFuture;

use super::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::ExecutionFault;

/// Environment applied to every non-interactive command so git never waits
/// on a credential prompt.
const NON_INTERACTIVE_ENV: &[(&str, &str)] = &[
    ("GIT_TERMINAL_PROMPT", "0"),
    ("GCM_INTERACTIVE", "never"),
];

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    timeout: Option<Duration>,
    interactive: bool,
}

impl CommandRequest {
    /// Creates a request for `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            timeout: None,
            interactive: false,
        }
    }

    /// Creates a `git` request with the given arguments.
    #[must_use]
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git").with_args(args)
    }

    /// Appends arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Sets an optional timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Marks the command as interactive (inherits the terminal).
    #[must_use]
    pub const fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Renders the request as a shell-like command line.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

/// Structured result of a command that ran.
///
/// `succeeded()` depends only on the exit code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    exit_code: i32,
    stdout: String,
    stderr: String,
    duration: Duration,
    timed_out: bool,
}

impl CommandOutcome {
    /// Creates an outcome from its parts.
    #[must_use]
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            duration: Duration::ZERO,
            timed_out: false,
        }
    }

    /// Sets the measured duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Marks the outcome as killed after a timeout.
    #[must_use]
    pub const fn with_timed_out(mut self, timed_out: bool) -> Self {
        self.timed_out = timed_out;
        self
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// True iff the exit code is zero.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the most useful one-line message for a failed command.
    ///
    /// Prefers the last non-empty stderr line, then stdout.
    #[must_use]
    pub fn failure_message(&self) -> String {
        let last_line = |text: &str| {
            text.lines()
                .rev()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string)
        };
        last_line(&self.stderr)
            .or_else(|| last_line(&self.stdout))
            .unwrap_or_else(|| format!("exit code {}", self.exit_code))
    }
}

impl From<ProcessOutput> for CommandOutcome {
    fn from(output: ProcessOutput) -> Self {
        let (exit_code, stdout, stderr, timed_out, duration) = output.into_parts();
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            timed_out,
        }
    }
}

/// Capability to run one external command.
///
/// Implementations never turn a non-zero exit into an error.
pub trait CommandRunner: Send + Sync {
    /// Runs the request to completion.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutionFault`] only when the process could not be
    /// started or waited on.
    fn run<'a>(
        &'a self,
        request: &'a CommandRequest,
    ) -> BoxFuture<'a, Result<CommandOutcome, ExecutionFault>>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks that `git` can be found in PATH.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionFault::NotFound`] when it cannot.
    pub fn ensure_git() -> Result<PathBuf, ExecutionFault> {
        ProcessBuilder::find("git").ok_or_else(|| ExecutionFault::NotFound {
            program: "git".to_string(),
        })
    }

    fn builder_for(request: &CommandRequest) -> ProcessBuilder {
        let mut builder = ProcessBuilder::new(request.program())
            .args(request.args())
            .maybe_timeout(request.timeout());

        if let Some(cwd) = request.cwd() {
            builder = builder.cwd(cwd);
        }

        if request.is_interactive() {
            builder.inherit_stdio()
        } else {
            NON_INTERACTIVE_ENV
                .iter()
                .fold(builder, |b, (key, value)| b.env(*key, *value))
                .capture_output()
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run<'a>(
        &'a self,
        request: &'a CommandRequest,
    ) -> BoxFuture<'a, Result<CommandOutcome, ExecutionFault>> {
        Box::pin(async move {
            let output = Self::builder_for(request).run().await?;
            Ok(CommandOutcome::from(output))
        })
    }
}
