//! Job identity and remote processing status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::Clip;

/// Unique identifier for a processing job.
///
/// The backend treats job ids as opaque strings; clients must never
/// assume a particular format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new random job ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id is empty (never valid for polling).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remote job status as reported by `GET /status/{job_id}`.
///
/// Parsing is deliberately tolerant: the backend has emitted
/// `queued` and `uploaded` before `processing` in past deployments,
/// and any string outside the recognized set is preserved verbatim
/// and treated as non-terminal. This is a wire-contract policy, not
/// a strict enum check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    /// Job is actively being processed
    Processing,
    /// Job completed successfully
    Completed,
    /// Job failed with an error
    Failed,
    /// Unrecognized status string, treated as non-terminal
    Other(String),
}

impl JobStatus {
    /// Parse a wire status string, preserving unknown values.
    pub fn parse(s: &str) -> Self {
        match s {
            "processing" => JobStatus::Processing,
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed,
            other => JobStatus::Other(other.to_string()),
        }
    }

    /// Get the string representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Other(s) => s,
        }
    }

    /// Check if this is a terminal state (no more polling expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        JobStatus::parse(&s)
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single server-side processing job tracked by the client.
///
/// At most one job is live per orchestrator instance; it is discarded
/// on reset or when a new submission replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job ID
    pub id: JobId,

    /// Last observed remote status
    pub status: JobStatus,

    /// Result clips, present only after a successful results fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Clip>>,

    /// Error message (if the job or its result fetch failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When the job was submitted
    pub created_at: DateTime<Utc>,

    /// When the status was last updated
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a job record for a freshly obtained id.
    ///
    /// The initial status is `Other("submitted")` until the first
    /// status poll overwrites it.
    pub fn new(id: JobId) -> Self {
        let now = Utc::now();
        Self {
            id,
            status: JobStatus::Other("submitted".to_string()),
            results: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a newly observed status.
    pub fn set_status(&mut self, status: JobStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Attach fetched results.
    pub fn set_results(&mut self, results: Vec<Clip>) {
        self.results = Some(results);
        self.updated_at = Utc::now();
    }

    /// Mark the job as failed with an error message.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.status = JobStatus::Failed;
        self.error_message = Some(error.into());
        self.updated_at = Utc::now();
    }

    /// Check if the job is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Result clips, empty until fetched.
    pub fn clips(&self) -> &[Clip] {
        self.results.as_deref().unwrap_or_default()
    }
}
