// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Multi-remote push coordination.
//!
//! ```text
//! PushCoordinator::new(registry, runner, workdir)
//!   .with_cancel_token()  .with_dry_run()  .with_job_timeout()
//!   .push(remotes, spec, mode).await
//!       validate: NoRemotes / DuplicateRemote / InvalidSpec / UnknownRemote
//!       build PushJob per remote (index = caller position)
//!           |
//!   +-------+-------------------+
//!   |                           |
//! Sequential               Parallel { max_concurrency }
//! caller order,            flume queue (pre-filled, FIFO)
//! no fail-fast             N = min(max, jobs) workers in a JoinSet
//!   |                      Started(index) / Finished(index, status)
//!   |                          --> result channel
//!   +-------+-------------------+
//!           v
//!   slots[index] --> PushReport (caller order)
//!   never-started slot --> Cancelled
//!   started, never finished (worker panicked) --> Faulted(Aborted)
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`PushCoordinator`] | Validates a request and runs one job per remote |
//! | [`PushSpec`] | Branch and [`PushFlags`] shared by all jobs |
//! | [`PushJob`] | One push to one remote |
//! | [`JobStatus`] | Completed / `TimedOut` / Faulted / Cancelled / Planned |
//! | [`PushReport`] | Ordered entries, overall success |

pub mod job;
pub mod report;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::runner::CommandRunner;
use crate::error::{ExecutionFault, PushError};
use crate::git::remote::RemoteRegistry;

pub use job::{PushFlags, PushJob, PushSpec};
pub use report::{JobStatus, PushEntry, PushReport};

/// Maximum simultaneous pushes when none is configured.
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// How jobs are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushMode {
    /// One job at a time, in caller order.
    Sequential,
    /// A bounded worker pool. A limit of 0 is treated as 1.
    Parallel { max_concurrency: usize },
}

impl Default for PushMode {
    fn default() -> Self {
        Self::Parallel {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

/// Progress reported by a parallel worker.
enum WorkerEvent {
    Started(usize),
    Finished(usize, JobStatus),
}

/// Per-job state while workers run.
enum Slot {
    Waiting,
    Running,
    Done(JobStatus),
}

/// Coordinates a push across several remotes.
pub struct PushCoordinator {
    /// Known remotes; read-only here.
    registry: RemoteRegistry,

    /// Executes each `git push`.
    runner: Arc<dyn CommandRunner>,

    /// Repository work tree the pushes run in.
    workdir: PathBuf,

    /// Cooperative cancellation; checked before each job starts.
    cancel_token: CancellationToken,

    /// Report planned commands instead of running them.
    dry_run: bool,

    /// Per-job timeout.
    job_timeout: Option<Duration>,
}

impl PushCoordinator {
    #[must_use]
    pub fn new(
        registry: RemoteRegistry,
        runner: Arc<dyn CommandRunner>,
        workdir: impl AsRef<Path>,
    ) -> Self {
        Self {
            registry,
            runner,
            workdir: workdir.as_ref().to_path_buf(),
            cancel_token: CancellationToken::new(),
            dry_run: false,
            job_timeout: None,
        }
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the per-job timeout.
    #[must_use]
    pub const fn with_job_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.job_timeout = timeout;
        self
    }

    /// Uses an externally owned cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &RemoteRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the cancellation token for sharing with signal handlers.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Stops dispatching new jobs. Running jobs finish.
    pub fn interrupt(&self) {
        info!("Interrupting push");
        self.cancel_token.cancel();
    }

    /// Pushes `spec` to every remote in `remotes`.
    ///
    /// Returns exactly one entry per remote, in the order given.
    ///
    /// # Errors
    ///
    /// Returns a [`PushError`] when the request is invalid. No job has been
    /// started in that case.
    pub async fn push(
        &self,
        remotes: &[String],
        spec: &PushSpec,
        mode: PushMode,
    ) -> Result<PushReport, PushError> {
        let jobs = self.build_jobs(remotes, spec)?;

        info!(
            remotes = jobs.len(),
            branch = %spec.branch(),
            mode = ?mode,
            dry_run = self.dry_run,
            "Starting push"
        );

        let statuses = if self.dry_run {
            jobs.iter()
                .map(|job| JobStatus::Planned {
                    command_line: job.to_request(&self.workdir, self.job_timeout).command_line(),
                })
                .collect()
        } else {
            match mode {
                PushMode::Sequential => self.run_sequential(&jobs).await,
                PushMode::Parallel { max_concurrency } => {
                    self.run_parallel(&jobs, max_concurrency).await
                }
            }
        };

        let entries = jobs
            .iter()
            .zip(statuses)
            .map(|(job, status)| PushEntry::new(job.remote(), status))
            .collect();
        let report = PushReport::new(entries);

        info!(summary = %report.summary(), "Push finished");
        Ok(report)
    }

    /// Validates the request and builds one job per remote.
    fn build_jobs(&self, remotes: &[String], spec: &PushSpec) -> Result<Vec<PushJob>, PushError> {
        if remotes.is_empty() {
            return Err(PushError::NoRemotes);
        }

        let mut seen = HashSet::with_capacity(remotes.len());
        if let Some(dup) = remotes.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(PushError::DuplicateRemote { name: dup.clone() });
        }

        spec.validate()?;

        let unknown: Vec<String> = remotes
            .iter()
            .filter(|name| !self.registry.contains(name))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(PushError::UnknownRemote { names: unknown });
        }

        Ok(remotes
            .iter()
            .enumerate()
            .map(|(index, remote)| PushJob::new(index, remote.as_str(), spec))
            .collect())
    }

    async fn run_sequential(&self, jobs: &[PushJob]) -> Vec<JobStatus> {
        let mut statuses = Vec::with_capacity(jobs.len());
        for job in jobs {
            if self.is_cancelled() {
                debug!(remote = %job.remote(), "cancelled before start");
                statuses.push(JobStatus::Cancelled);
                continue;
            }
            statuses.push(
                run_job(self.runner.as_ref(), job, &self.workdir, self.job_timeout).await,
            );
        }
        statuses
    }

    async fn run_parallel(&self, jobs: &[PushJob], max_concurrency: usize) -> Vec<JobStatus> {
        let workers = max_concurrency.clamp(1, jobs.len().max(1));

        let (job_tx, job_rx) = flume::unbounded::<PushJob>();
        for job in jobs {
            // Receiver is alive in this scope.
            let _ = job_tx.send(job.clone());
        }
        drop(job_tx);

        let (event_tx, event_rx) = flume::unbounded::<WorkerEvent>();

        let mut set = JoinSet::new();
        for worker in 0..workers {
            let job_rx = job_rx.clone();
            let event_tx = event_tx.clone();
            let runner = Arc::clone(&self.runner);
            let workdir = self.workdir.clone();
            let token = self.cancel_token.clone();
            let timeout = self.job_timeout;

            set.spawn(async move {
                loop {
                    if token.is_cancelled() {
                        debug!(worker, "cancelled, not taking more jobs");
                        break;
                    }
                    let Ok(job) = job_rx.try_recv() else {
                        break;
                    };
                    let _ = event_tx.send(WorkerEvent::Started(job.index()));
                    let status = run_job(runner.as_ref(), &job, &workdir, timeout).await;
                    let _ = event_tx.send(WorkerEvent::Finished(job.index(), status));
                }
            });
        }
        drop(event_tx);

        let mut panics = Vec::new();
        while let Some(joined) = set.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "push worker failed");
                panics.push(e.to_string());
            }
        }

        let mut slots: Vec<Slot> = std::iter::repeat_with(|| Slot::Waiting)
            .take(jobs.len())
            .collect();
        for event in event_rx.drain() {
            let (index, next) = match event {
                WorkerEvent::Started(index) => (index, Slot::Running),
                WorkerEvent::Finished(index, status) => (index, Slot::Done(status)),
            };
            if let Some(slot) = slots.get_mut(index) {
                *slot = next;
            }
        }

        let reason = if panics.is_empty() {
            "worker stopped without a result".to_string()
        } else {
            panics.join("; ")
        };
        slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Done(status) => status,
                Slot::Waiting => JobStatus::Cancelled,
                Slot::Running => JobStatus::Faulted(ExecutionFault::Aborted {
                    program: "git".to_string(),
                    reason: reason.clone(),
                }),
            })
            .collect()
    }
}

/// Runs one job, turning every failure into that job's status.
async fn run_job(
    runner: &dyn CommandRunner,
    job: &PushJob,
    workdir: &Path,
    timeout: Option<Duration>,
) -> JobStatus {
    let request = job.to_request(workdir, timeout);
    debug!(remote = %job.remote(), cmd = %request.command_line(), "push job started");

    let status = match runner.run(&request).await {
        Ok(outcome) if outcome.timed_out() => JobStatus::TimedOut(outcome),
        Ok(outcome) => JobStatus::Completed(outcome),
        Err(fault) => JobStatus::Faulted(fault),
    };

    if status.is_success() {
        info!(remote = %job.remote(), status = status.label(), "push settled");
    } else {
        warn!(
            remote = %job.remote(),
            status = status.label(),
            detail = %status.detail().unwrap_or_default(),
            "push settled"
        );
    }

    status
}
