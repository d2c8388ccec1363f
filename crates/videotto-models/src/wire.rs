//! HTTP wire payloads exchanged with the processing backend.
//!
//! Field names are frozen to the backend contract and must not be
//! renamed:
//! - `POST /process` (or `POST /process/{job_id}`) -> [`SubmitResponse`]
//! - `GET /status/{job_id}` -> [`StatusResponse`]
//! - `GET /results/{job_id}` -> [`ResultsResponse`]

use serde::{Deserialize, Serialize};

use crate::{Clip, JobId, JobStatus};

/// Response to a submit/process request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Opaque id of the newly created job
    pub job_id: JobId,
}

/// Response to a status poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Current status; tolerant decode, unknown strings preserved
    pub status: JobStatus,
}

/// Response to a results fetch.
///
/// The backend may send `null` or omit `results` entirely; both decode
/// as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Option<Vec<Clip>>,
}

impl ResultsResponse {
    /// The clip list, treating absent/null results as empty.
    pub fn into_clips(self) -> Vec<Clip> {
        self.results.unwrap_or_default()
    }
}
