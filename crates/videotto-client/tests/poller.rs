//! Poll loop behavior against a mock backend.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use videotto_client::{ApiClient, ClientConfig, ClientError, JobStatusPoller, PollOutcome};
use videotto_models::{JobId, JobStatus};

fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.uri()).with_poll_interval(Duration::from_millis(1))
}

fn status_body(status: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": status }))
}

async fn run_poller(
    config: &ClientConfig,
    job_id: &str,
) -> (Result<PollOutcome, ClientError>, Vec<JobStatus>) {
    let api = ApiClient::new(config).unwrap();
    let poller = JobStatusPoller::new(api, config);

    let mut observed = Vec::new();
    let outcome = poller
        .run(&JobId::from_string(job_id), |status| {
            observed.push(status.clone())
        })
        .await;
    (outcome, observed)
}

#[tokio::test]
async fn stops_on_completed_after_non_terminal_observations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(status_body("processing"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(status_body("completed"))
        .expect(1)
        .mount(&server)
        .await;

    let (outcome, observed) = run_poller(&test_config(&server), "abc").await;

    assert!(matches!(outcome, Ok(PollOutcome::Completed)));
    assert_eq!(
        observed,
        vec![
            JobStatus::Processing,
            JobStatus::Processing,
            JobStatus::Completed,
        ]
    );
}

#[tokio::test]
async fn failed_status_is_terminal_on_first_observation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(status_body("failed"))
        .expect(1)
        .mount(&server)
        .await;

    let (outcome, observed) = run_poller(&test_config(&server), "abc").await;

    assert!(matches!(outcome, Ok(PollOutcome::Failed)));
    assert_eq!(observed, vec![JobStatus::Failed]);
}

#[tokio::test]
async fn transport_error_ends_the_loop_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (outcome, observed) = run_poller(&test_config(&server), "abc").await;

    assert!(matches!(outcome, Err(ClientError::Polling(_))));
    assert!(observed.is_empty());
}

#[tokio::test]
async fn parse_error_ends_the_loop_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let (outcome, _) = run_poller(&test_config(&server), "abc").await;

    assert!(matches!(outcome, Err(ClientError::Polling(_))));
}

#[tokio::test]
async fn unrecognized_status_is_retried_not_rejected() {
    let server = MockServer::start().await;

    // The original backend emits "queued"/"uploaded" before "processing".
    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(status_body("queued"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(status_body("completed"))
        .expect(1)
        .mount(&server)
        .await;

    let (outcome, observed) = run_poller(&test_config(&server), "abc").await;

    assert!(matches!(outcome, Ok(PollOutcome::Completed)));
    assert_eq!(observed[0], JobStatus::Other("queued".to_string()));
}

#[tokio::test]
async fn opt_in_poll_bound_stops_an_unresponsive_job() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status/abc"))
        .respond_with(status_body("processing"))
        .expect(3)
        .mount(&server)
        .await;

    let config = test_config(&server).with_max_polls(3);
    let (outcome, observed) = run_poller(&config, "abc").await;

    assert!(matches!(outcome, Err(ClientError::Polling(_))));
    assert_eq!(observed.len(), 3);
}
