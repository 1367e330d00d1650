// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//!            run()
//!              |
//!              v
//!     validate working dir ----> ExecutionFault::InvalidWorkingDir
//!              |
//!              v
//!     build_command()
//!     args, cwd, env, stdio, process group
//!              |
//!              v
//!          spawn() ------------> ExecutionFault::{NotFound, PermissionDenied, Spawn}
//!              |
//!              v
//!   run_child (readers + wait + timeout)
//!              |
//!              v
//!       ProcessOutput
//!   { exit_code, stdout, stderr, timed_out, duration }
//! ```
//!
//! Non-zero exit codes are returned as data; they are never errors here.

use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::ExecutionFault;

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// stdout and stderr are drained by their own tasks while the process
    /// runs, so no amount of output can block the child.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutionFault`] if:
    /// - The working directory does not exist or is not a directory.
    /// - Spawning the child process fails (missing binary, permissions, ...).
    /// - Waiting on the child fails.
    ///
    /// A non-zero exit status is not an error.
    pub async fn run(self) -> Result<ProcessOutput, ExecutionFault> {
        let name = self.display_name();

        if let Some(cwd) = self.working_dir() {
            if !cwd.is_dir() {
                return Err(ExecutionFault::InvalidWorkingDir { path: cwd.clone() });
            }
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(program = %self.program().display(), args = ?self.args_slice(), "exec");

        let mut command = self.build_command();
        let started = Instant::now();

        let mut child = command.spawn().map_err(|source| {
            ExecutionFault::from_spawn_error(self.program().display().to_string(), source)
        })?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let captured = self.run_child(&name, &mut child).await?;
        let duration = started.elapsed();

        trace!(
            process = %name,
            exit_code = captured.exit_code,
            timed_out = captured.timed_out,
            elapsed_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "completed"
        );

        Ok(ProcessOutput::new(
            captured.exit_code,
            captured.stdout,
            captured.stderr,
            captured.timed_out,
            duration,
        ))
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.environment() {
            command.env(key, value);
        }

        if self.is_interactive() {
            command.stdin(Stdio::inherit());
        } else {
            command.stdin(Stdio::null());
            // Out of the terminal's foreground group: Ctrl+C reaches gw only.
            #[cfg(unix)]
            command.process_group(0);
        }

        command.stdout(Self::stdio_from_flags(self.stdout_config()));
        command.stderr(Self::stdio_from_flags(self.stderr_config()));

        command.kill_on_drop(true);

        command
    }

    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else {
            Stdio::piped()
        }
    }
}
