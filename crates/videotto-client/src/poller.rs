//! Status polling loop.

use std::time::Duration;

use tracing::{debug, warn};

use videotto_models::{JobId, JobStatus};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Terminal outcome of a completed poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Backend reported `completed`; results may now be fetched.
    Completed,
    /// Backend reported `failed`; no results exist.
    Failed,
}

/// Polls `GET /status/{job_id}` until a terminal status.
///
/// One poller drives at most one loop: [`JobStatusPoller::run`]
/// consumes it, so a finished or errored loop cannot be restarted
/// by accident.
///
/// The loop has no overall timeout by default: the backend contract
/// keeps reporting non-terminal statuses for as long as processing
/// runs, and the next request is only issued after the previous
/// response has been processed, so observations are totally ordered.
/// Transport and parse errors are terminal on first occurrence; there
/// is no retry in this loop.
#[derive(Debug)]
pub struct JobStatusPoller {
    api: ApiClient,
    interval: Duration,
    max_polls: Option<u32>,
}

impl JobStatusPoller {
    /// Create a poller from a client and config.
    pub fn new(api: ApiClient, config: &ClientConfig) -> Self {
        Self {
            api,
            interval: config.poll_interval,
            max_polls: config.max_polls,
        }
    }

    /// Run the loop to its terminal observation.
    ///
    /// Every observed status (terminal included) is passed to
    /// `observe` in order. Returns the terminal outcome, or an error
    /// if a status request failed or the opt-in `max_polls` bound was
    /// exhausted.
    pub async fn run(
        self,
        job_id: &JobId,
        mut observe: impl FnMut(&JobStatus),
    ) -> ClientResult<PollOutcome> {
        let mut polls = 0u32;

        loop {
            let status = self.api.status(job_id).await?;
            debug!(job_id = %job_id, status = %status, "Observed job status");
            observe(&status);

            match status {
                JobStatus::Completed => return Ok(PollOutcome::Completed),
                JobStatus::Failed => return Ok(PollOutcome::Failed),
                JobStatus::Processing => {}
                JobStatus::Other(ref s) => {
                    // Tolerant-parsing policy: unknown statuses are
                    // non-terminal and retried on the next tick.
                    debug!(job_id = %job_id, status = %s, "Unrecognized status, continuing to poll");
                }
            }

            polls += 1;
            if let Some(max) = self.max_polls {
                if polls >= max {
                    warn!(job_id = %job_id, max, "Poll bound exhausted without terminal status");
                    return Err(ClientError::polling(format!(
                        "no terminal status after {} polls",
                        max
                    )));
                }
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}
