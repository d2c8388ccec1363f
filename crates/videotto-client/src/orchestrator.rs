//! Job lifecycle orchestration.
//!
//! Sequences submission -> polling -> result retrieval and exposes a
//! single observable lifecycle state through a watch channel. Owns
//! cancellation: submitting a new job or resetting bumps an epoch
//! counter and aborts the in-flight task, so a stale completion can
//! never mutate current-generation state.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use videotto_models::{Clip, Job, JobStatus};

use crate::api::{ApiClient, SubmitInput};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::poller::{JobStatusPoller, PollOutcome};

/// Observable lifecycle state of the current job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// No job; ready for a submission
    #[default]
    Idle,
    /// Submit request in flight
    Submitting,
    /// Submit request failed or returned no job id
    SubmitFailed,
    /// Job id obtained; status polling in progress
    Polling,
    /// Polling reported failure, or a status request errored
    Failed,
    /// Poll completed; results request in flight
    FetchingResults,
    /// Processing succeeded but result retrieval failed
    ResultsError,
    /// Results fetched; clips available
    Completed,
}

impl LifecycleState {
    /// Get string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Submitting => "submitting",
            LifecycleState::SubmitFailed => "submit_failed",
            LifecycleState::Polling => "polling",
            LifecycleState::Failed => "failed",
            LifecycleState::FetchingResults => "fetching_results",
            LifecycleState::ResultsError => "results_error",
            LifecycleState::Completed => "completed",
        }
    }

    /// Check if this is a terminal state (a new submission is allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LifecycleState::SubmitFailed
                | LifecycleState::Failed
                | LifecycleState::ResultsError
                | LifecycleState::Completed
        )
    }

    /// Check if work is in flight (a new submission must be rejected).
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            LifecycleState::Submitting | LifecycleState::Polling | LifecycleState::FetchingResults
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct Inner {
    /// Generation counter; completions tagged with an older epoch are no-ops.
    epoch: AtomicU64,
    state_tx: watch::Sender<LifecycleState>,
    job: Mutex<Option<Job>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Inner {
    /// Publish a state transition, unless this epoch has been superseded.
    fn publish(&self, epoch: u64, state: LifecycleState) -> bool {
        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!(state = %state, "Dropping state transition from superseded job");
            return false;
        }
        self.state_tx.send_replace(state);
        true
    }

    /// Mutate the current job, unless this epoch has been superseded.
    fn with_job(&self, epoch: u64, f: impl FnOnce(&mut Job)) {
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return;
        }
        let mut guard = self.job.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(job) = guard.as_mut() {
            f(job);
        }
    }
}

/// Drives one job at a time through submit -> poll -> fetch results.
pub struct JobLifecycleOrchestrator {
    api: ApiClient,
    config: ClientConfig,
    inner: Arc<Inner>,
}

impl JobLifecycleOrchestrator {
    /// Create an orchestrator against the given backend config.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::new(&config)?;
        let (state_tx, _) = watch::channel(LifecycleState::Idle);

        Ok(Self {
            api,
            config,
            inner: Arc::new(Inner {
                epoch: AtomicU64::new(0),
                state_tx,
                job: Mutex::new(None),
                task: Mutex::new(None),
            }),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        *self.inner.state_tx.borrow()
    }

    /// Subscribe to state transitions.
    ///
    /// Late subscribers immediately observe the current state.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.inner.state_tx.subscribe()
    }

    /// Whether a submission would currently be rejected.
    ///
    /// Intended for the presentation layer's disabled predicate on the
    /// submit control.
    pub fn is_busy(&self) -> bool {
        self.state().is_busy()
    }

    /// Snapshot of the current job, if any.
    pub fn job(&self) -> Option<Job> {
        self.inner
            .job
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Result clips of the current job, empty until fetched.
    pub fn clips(&self) -> Vec<Clip> {
        self.job().map(|j| j.clips().to_vec()).unwrap_or_default()
    }

    /// Submit a new job.
    ///
    /// Rejected with [`ClientError::Busy`] while a submission is in
    /// flight or a job is non-terminal. The call returns as soon as
    /// the lifecycle task is spawned; progress is observed through
    /// [`subscribe`](Self::subscribe).
    pub fn submit(&self, input: SubmitInput) -> ClientResult<()> {
        if self.is_busy() {
            return Err(ClientError::Busy);
        }

        // Supersede any previous job before the new task starts.
        let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.abort_task();
        *self.inner.job.lock().unwrap_or_else(|e| e.into_inner()) = None;
        self.inner.state_tx.send_replace(LifecycleState::Submitting);

        let api = self.api.clone();
        let config = self.config.clone();
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            run_lifecycle(api, config, inner, epoch, input).await;
        });

        *self.inner.task.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);
        Ok(())
    }

    /// Discard the current job and return to `idle`.
    ///
    /// Cancels any in-flight poll; idempotent.
    pub fn reset(&self) {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.abort_task();
        *self.inner.job.lock().unwrap_or_else(|e| e.into_inner()) = None;
        self.inner.state_tx.send_replace(LifecycleState::Idle);
    }

    fn abort_task(&self) {
        let handle = self
            .inner
            .task
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

impl Drop for JobLifecycleOrchestrator {
    fn drop(&mut self) {
        self.abort_task();
    }
}

async fn run_lifecycle(
    api: ApiClient,
    config: ClientConfig,
    inner: Arc<Inner>,
    epoch: u64,
    input: SubmitInput,
) {
    let job_id = match api.submit(input).await {
        Ok(job_id) => job_id,
        Err(e) => {
            warn!("Submission failed: {}", e);
            inner.publish(epoch, LifecycleState::SubmitFailed);
            return;
        }
    };

    {
        if inner.epoch.load(Ordering::SeqCst) != epoch {
            return;
        }
        let mut guard = inner.job.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Job::new(job_id.clone()));
    }
    if !inner.publish(epoch, LifecycleState::Polling) {
        return;
    }
    info!(job_id = %job_id, "Polling job status");

    let poller = JobStatusPoller::new(api.clone(), &config);
    let observe_inner = Arc::clone(&inner);
    let outcome = poller
        .run(&job_id, |status: &JobStatus| {
            observe_inner.with_job(epoch, |job| job.set_status(status.clone()));
        })
        .await;

    match outcome {
        Ok(PollOutcome::Completed) => {}
        Ok(PollOutcome::Failed) => {
            inner.with_job(epoch, |job| job.fail("backend reported failure"));
            inner.publish(epoch, LifecycleState::Failed);
            return;
        }
        Err(e) => {
            warn!(job_id = %job_id, "Polling ended with error: {}", e);
            inner.with_job(epoch, |job| job.fail(e.to_string()));
            inner.publish(epoch, LifecycleState::Failed);
            return;
        }
    }

    if !inner.publish(epoch, LifecycleState::FetchingResults) {
        return;
    }

    match api.results(&job_id).await {
        Ok(clips) => {
            info!(job_id = %job_id, clips = clips.len(), "Job completed");
            inner.with_job(epoch, |job| job.set_results(clips));
            inner.publish(epoch, LifecycleState::Completed);
        }
        Err(e) => {
            warn!(job_id = %job_id, "Result fetch failed: {}", e);
            inner.with_job(epoch, |job| {
                job.error_message = Some(e.to_string());
            });
            inner.publish(epoch, LifecycleState::ResultsError);
        }
    }
}
