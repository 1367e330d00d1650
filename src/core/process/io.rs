// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout reader task --+
//!   stderr reader task --+--> drain concurrently with wait()
//!   wait (or timeout -> kill process group)
//!   join readers --> CapturedRun { stdout, stderr, exit_code, timed_out }
//!
//! read_stream()
//!   read chunk --> append to shared buffer (KEEP_IN_STRING)
//!              --> trace complete lines (FORWARD_TO_LOG)
//! ```
//!
//! Readers append into a buffer shared with the caller, so whatever arrived
//! before a timeout is returned even if a reader has to be abandoned.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, StreamFlags};
use crate::error::ExecutionFault;

/// How long to keep draining pipes after a timed-out child was killed.
///
/// A descendant that left the process group may still hold a pipe open.
const POST_KILL_DRAIN: Duration = Duration::from_millis(500);

const READ_CHUNK: usize = 8 * 1024;

type SharedBytes = Arc<Mutex<Vec<u8>>>;

/// Result of a single child run before timing is attached.
pub(super) struct CapturedRun {
    pub(super) exit_code: i32,
    pub(super) stdout: String,
    pub(super) stderr: String,
    pub(super) timed_out: bool,
}

/// A reader task and the buffer it fills.
struct StreamCapture {
    handle: JoinHandle<()>,
    bytes: SharedBytes,
}

/// Spawns a reader task draining one pipe.
///
/// A reader is spawned whenever the pipe exists, even if the output is not
/// kept, so the child can never block on a full pipe.
fn spawn_reader<R>(
    pipe: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<StreamCapture>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    pipe.map(|pipe| {
        let bytes = SharedBytes::default();
        let sink = Arc::clone(&bytes);
        let name = process_name.to_string();
        let handle =
            tokio::spawn(async move { read_stream(pipe, flags, &name, stream_name, &sink).await });
        StreamCapture { handle, bytes }
    })
}

/// Waits for a reader task and decodes what it captured.
///
/// With a grace period the reader is abandoned once it expires; the bytes
/// read so far are still returned.
async fn collect_output(
    capture: Option<StreamCapture>,
    grace: Option<Duration>,
    stream_name: &str,
) -> String {
    let Some(StreamCapture { handle, bytes }) = capture else {
        return String::new();
    };

    let joined = match grace {
        Some(limit) => {
            let abort = handle.abort_handle();
            if let Ok(joined) = tokio::time::timeout(limit, handle).await {
                joined
            } else {
                debug!(stream = %stream_name, "pipe still open after kill, keeping partial output");
                abort.abort();
                Ok(())
            }
        }
        None => handle.await,
    };

    if let Err(e) = joined {
        warn!(stream = %stream_name, error = %e, "reader task failed");
    }

    let captured = bytes.lock().unwrap_or_else(PoisonError::into_inner);
    String::from_utf8_lossy(&captured).into_owned()
}

/// Kills a timed-out child together with everything in its process group.
async fn kill_tree(name: &str, child: &mut Child, own_group: bool) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        if own_group && let Some(pid) = child.id().and_then(|id| i32::try_from(id).ok()) {
            match killpg(Pid::from_raw(pid), Signal::SIGKILL) {
                Ok(()) => return,
                Err(e) => debug!(process = %name, error = %e, "killing process group failed"),
            }
        }
    }
    #[cfg(not(unix))]
    let _ = own_group;

    if let Err(e) = child.kill().await {
        debug!(process = %name, error = %e, "kill after timeout failed");
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
    ) -> Result<CapturedRun, ExecutionFault> {
        let stdout_capture =
            spawn_reader(child.stdout.take(), self.stdout_config(), name, "stdout");
        let stderr_capture =
            spawn_reader(child.stderr.take(), self.stderr_config(), name, "stderr");

        let wait_fault = |source| ExecutionFault::Wait {
            program: name.to_string(),
            source,
        };

        let (exit_status, timed_out) = if let Some(limit) = self.timeout_duration() {
            tokio::select! {
                status = child.wait() => (status.map_err(wait_fault)?, false),
                () = tokio::time::sleep(limit) => {
                    warn!(process = %name, timeout = ?limit, "process timed out");
                    kill_tree(name, child, !self.is_interactive()).await;
                    (child.wait().await.map_err(wait_fault)?, true)
                }
            }
        } else {
            (child.wait().await.map_err(wait_fault)?, false)
        };

        let grace = timed_out.then_some(POST_KILL_DRAIN);
        let (stdout, stderr) = tokio::join!(
            collect_output(stdout_capture, grace, "stdout"),
            collect_output(stderr_capture, grace, "stderr"),
        );

        Ok(CapturedRun {
            exit_code: exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
            timed_out,
        })
    }
}

/// Reads a stream to EOF, keeping raw bytes and tracing complete lines.
///
/// Chunks land in `sink` as soon as they are read.
async fn read_stream<R>(
    mut reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
    sink: &Mutex<Vec<u8>>,
) where
    R: AsyncRead + Unpin,
{
    let mut chunk = vec![0_u8; READ_CHUNK];
    let mut pending = Vec::new();

    let trace_line = |line: &[u8]| {
        let text = String::from_utf8_lossy(line);
        trace!(
            process = %process_name,
            stream = %stream_name,
            line = %text.trim_end(),
            "output"
        );
    };

    loop {
        let read = match reader.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => &chunk[..n],
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        };

        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(read);
        }

        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            pending.extend_from_slice(read);
            while let Some(end) = pending.iter().position(|&b| b == b'\n') {
                trace_line(&pending[..=end]);
                pending.drain(..=end);
            }
        }
    }

    if !pending.is_empty() {
        trace_line(&pending);
    }
}
