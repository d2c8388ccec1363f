//! Client configuration.

use std::time::Duration;

/// Configuration for the API client and poller.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the processing backend
    pub base_url: String,
    /// Fixed delay between non-terminal status observations
    pub poll_interval: Duration,
    /// Per-request timeout for HTTP calls
    pub request_timeout: Duration,
    /// Optional upper bound on status polls before giving up.
    ///
    /// The observed backend contract has no poll timeout: polling
    /// continues for as long as the backend reports a non-terminal
    /// status. This bound is an explicit opt-in deviation for callers
    /// that want one; it is never applied by default.
    pub max_polls: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            poll_interval: Duration::from_millis(1500),
            request_timeout: Duration::from_secs(30),
            max_polls: None,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VIDEOTTO_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            poll_interval: Duration::from_millis(
                std::env::var("VIDEOTTO_POLL_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1500),
            ),
            request_timeout: Duration::from_secs(
                std::env::var("VIDEOTTO_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            max_polls: std::env::var("VIDEOTTO_MAX_POLLS")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the optional poll bound.
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(max_polls);
        self
    }
}
