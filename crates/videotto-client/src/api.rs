//! HTTP API client for the processing backend.
//!
//! Thin wrapper over `reqwest` that speaks the backend contract:
//! - `POST /process` (direct multipart upload) -> `{ "job_id": ... }`
//! - `POST /process/{job_id}` (two-phase variant, upload already done)
//! - `GET /status/{job_id}` -> `{ "status": ... }`
//! - `GET /results/{job_id}` -> `{ "results": [...] | null }`

use reqwest::Client;
use tracing::debug;
use url::Url;

use videotto_models::{Clip, JobId, JobStatus, ResultsResponse, StatusResponse, SubmitResponse};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Input to a job submission.
///
/// Both variants are valid implementations of the same contract: end
/// with a job id or a submission failure.
#[derive(Debug, Clone)]
pub enum SubmitInput {
    /// Direct multipart upload of the video bytes to `POST /process`.
    Multipart { file_name: String, bytes: Vec<u8> },
    /// Two-phase variant: an external upload transport already produced
    /// a job id; trigger processing with `POST /process/{job_id}`.
    Uploaded(JobId),
}

/// Backend API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from a config.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        // Validate early so a bad base URL fails here, not mid-poll.
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::config(format!("invalid base URL '{}': {}", config.base_url, e)))?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Submit a job, returning its id.
    pub async fn submit(&self, input: SubmitInput) -> ClientResult<JobId> {
        match input {
            SubmitInput::Multipart { file_name, bytes } => {
                let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                let form = reqwest::multipart::Form::new().part("file", part);

                let response = self
                    .http
                    .post(self.endpoint("process"))
                    .multipart(form)
                    .send()
                    .await
                    .map_err(|e| ClientError::submission(format!("process request failed: {}", e)))?;

                if !response.status().is_success() {
                    return Err(ClientError::submission(format!(
                        "process request returned {}",
                        response.status()
                    )));
                }

                let body: SubmitResponse = response.json().await.map_err(|e| {
                    ClientError::submission(format!("process response had no job id: {}", e))
                })?;

                debug!(job_id = %body.job_id, "Job submitted");
                Ok(body.job_id)
            }
            SubmitInput::Uploaded(job_id) => {
                if job_id.is_empty() {
                    return Err(ClientError::submission("upload produced an empty job id"));
                }

                let response = self
                    .http
                    .post(self.endpoint(&format!("process/{}", job_id)))
                    .send()
                    .await
                    .map_err(|e| ClientError::submission(format!("process trigger failed: {}", e)))?;

                if !response.status().is_success() {
                    return Err(ClientError::submission(format!(
                        "process trigger returned {}",
                        response.status()
                    )));
                }

                debug!(job_id = %job_id, "Processing triggered for uploaded job");
                Ok(job_id)
            }
        }
    }

    /// Fetch the current status of a job.
    pub async fn status(&self, job_id: &JobId) -> ClientResult<JobStatus> {
        let response = self
            .http
            .get(self.endpoint(&format!("status/{}", job_id)))
            .send()
            .await
            .map_err(|e| ClientError::polling(format!("status request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ClientError::polling(format!(
                "status request returned {}",
                response.status()
            )));
        }

        let body: StatusResponse = response
            .json()
            .await
            .map_err(|e| ClientError::polling(format!("status response parse failed: {}", e)))?;

        Ok(body.status)
    }

    /// Fetch the result clips of a completed job.
    pub async fn results(&self, job_id: &JobId) -> ClientResult<Vec<Clip>> {
        let response = self
            .http
            .get(self.endpoint(&format!("results/{}", job_id)))
            .send()
            .await
            .map_err(|e| ClientError::result_fetch(format!("results request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ClientError::result_fetch(format!(
                "results request returned {}",
                response.status()
            )));
        }

        let body: ResultsResponse = response
            .json()
            .await
            .map_err(|e| ClientError::result_fetch(format!("results response parse failed: {}", e)))?;

        Ok(body.into_clips())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(ApiClient::new(&config), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ClientConfig::new("http://localhost:8000/");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.endpoint("status/abc"), "http://localhost:8000/status/abc");
    }
}
