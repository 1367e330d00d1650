// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-remote push results.

use crate::core::runner::CommandOutcome;
use crate::error::ExecutionFault;

/// How a single push job settled.
#[derive(Debug)]
pub enum JobStatus {
    /// git ran to completion; the outcome tells whether the push was accepted.
    Completed(CommandOutcome),
    /// git was killed after exceeding the job timeout.
    TimedOut(CommandOutcome),
    /// git could not be started for this job.
    Faulted(ExecutionFault),
    /// The job was never started because the push was cancelled.
    Cancelled,
    /// Dry run: the command that would have run.
    Planned { command_line: String },
}

impl JobStatus {
    /// True only for a completed push with a zero exit code.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Completed(outcome) if outcome.succeeded())
    }

    /// Short classification used in logs and summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Completed(outcome) if outcome.succeeded() => "pushed",
            Self::Completed(_) => "rejected",
            Self::TimedOut(_) => "timed out",
            Self::Faulted(_) => "fault",
            Self::Cancelled => "cancelled",
            Self::Planned { .. } => "planned",
        }
    }

    /// One-line detail for display (failure reason or planned command).
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Completed(outcome) if outcome.succeeded() => None,
            Self::Completed(outcome) => Some(outcome.failure_message()),
            Self::TimedOut(outcome) => Some(format!(
                "killed after {:.1}s",
                outcome.duration().as_secs_f64()
            )),
            Self::Faulted(fault) => Some(fault.to_string()),
            Self::Cancelled => None,
            Self::Planned { command_line } => Some(command_line.clone()),
        }
    }
}

/// One report line.
#[derive(Debug)]
pub struct PushEntry {
    remote: String,
    status: JobStatus,
}

impl PushEntry {
    #[must_use]
    pub fn new(remote: impl Into<String>, status: JobStatus) -> Self {
        Self {
            remote: remote.into(),
            status,
        }
    }

    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[must_use]
    pub const fn status(&self) -> &JobStatus {
        &self.status
    }
}

/// Result of a multi-remote push, one entry per requested remote in
/// submission order.
#[derive(Debug, Default)]
pub struct PushReport {
    entries: Vec<PushEntry>,
}

impl PushReport {
    #[must_use]
    pub const fn new(entries: Vec<PushEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[PushEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, remote: &str) -> Option<&JobStatus> {
        self.entries
            .iter()
            .find(|e| e.remote == remote)
            .map(PushEntry::status)
    }

    /// True iff every entry completed successfully.
    ///
    /// A dry-run plan pushed nothing and is never a success; callers check
    /// [`Self::is_plan`] first.
    #[must_use]
    pub fn success(&self) -> bool {
        self.entries.iter().all(|e| e.status.is_success())
    }

    /// True iff every entry is a dry-run plan.
    #[must_use]
    pub fn is_plan(&self) -> bool {
        !self.entries.is_empty()
            && self
                .entries
                .iter()
                .all(|e| matches!(e.status, JobStatus::Planned { .. }))
    }

    /// Remotes that accepted the push.
    #[must_use]
    pub fn succeeded(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.status.is_success())
            .map(PushEntry::remote)
            .collect()
    }

    /// Remotes that did not accept the push (including cancelled ones).
    #[must_use]
    pub fn failed(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.status.is_success() && !matches!(e.status, JobStatus::Planned { .. }))
            .map(PushEntry::remote)
            .collect()
    }

    /// `"<ok>/<total> remotes successful"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}/{} remotes successful",
            self.succeeded().len(),
            self.entries.len()
        )
    }
}
