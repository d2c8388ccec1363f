//! Upload transport seam for the two-phase submission variant.
//!
//! Chunked upload libraries are a black box to the lifecycle core:
//! all that matters is the event contract below (started, succeeded
//! with a job id, failed). [`HttpUpload`] is the plain single-request
//! implementation against the backend's `POST /upload` endpoint.

use std::future::Future;

use reqwest::Client;
use tracing::debug;

use videotto_models::{JobId, SubmitResponse};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Events emitted by an upload transport, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    /// Transfer started.
    Started,
    /// Transfer finished; the backend assigned a job id.
    Succeeded { job_id: JobId },
    /// Transfer failed.
    Failed { message: String },
}

/// An upload mechanism that ends with a job id or a failure.
pub trait UploadTransport {
    /// Run the upload to completion, emitting events in order.
    ///
    /// The terminal event (`Succeeded`/`Failed`) always matches the
    /// returned result.
    fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        on_event: &mut (dyn FnMut(UploadEvent) + Send),
    ) -> impl Future<Output = ClientResult<JobId>> + Send;
}

/// Single-request multipart upload to `POST /upload`.
#[derive(Debug, Clone)]
pub struct HttpUpload {
    http: Client,
    base_url: String,
}

impl HttpUpload {
    /// Create an upload transport from a client config.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn send(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<JobId> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::submission(format!("upload request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ClientError::submission(format!(
                "upload returned {}",
                response.status()
            )));
        }

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|e| ClientError::submission(format!("upload response had no job id: {}", e)))?;

        debug!(job_id = %body.job_id, "Upload accepted");
        Ok(body.job_id)
    }
}

impl UploadTransport for HttpUpload {
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        on_event: &mut (dyn FnMut(UploadEvent) + Send),
    ) -> ClientResult<JobId> {
        on_event(UploadEvent::Started);

        match self.send(file_name, bytes).await {
            Ok(job_id) => {
                on_event(UploadEvent::Succeeded {
                    job_id: job_id.clone(),
                });
                Ok(job_id)
            }
            Err(e) => {
                on_event(UploadEvent::Failed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
