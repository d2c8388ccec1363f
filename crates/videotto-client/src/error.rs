//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors produced by the job lifecycle client.
///
/// The variants map one-to-one onto the phases of the lifecycle so the
/// presentation layer can tell "processing failed" apart from
/// "processing succeeded but result retrieval failed".
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Polling failed: {0}")]
    Polling(String),

    #[error("Result fetch failed: {0}")]
    ResultFetch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A submission is already in progress")]
    Busy,
}

impl ClientError {
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    pub fn polling(msg: impl Into<String>) -> Self {
        Self::Polling(msg.into())
    }

    pub fn result_fetch(msg: impl Into<String>) -> Self {
        Self::ResultFetch(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
