//! Command-line front end for the Videotto job lifecycle.
//!
//! Submits a video file, follows the lifecycle state transitions, and
//! prints the resulting clips.

use std::path::Path;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use videotto_client::{
    ClientConfig, HttpUpload, JobLifecycleOrchestrator, SubmitInput, UploadTransport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("videotto=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let file_path = std::env::args()
        .nth(1)
        .context("usage: videotto <video-file>")?;

    let config = ClientConfig::from_env();
    info!(backend = %config.base_url, "Submitting {}", file_path);

    let bytes = tokio::fs::read(&file_path)
        .await
        .with_context(|| format!("failed to read {}", file_path))?;
    let file_name = Path::new(&file_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "video.mp4".to_string());

    // Two-phase variant: upload first, then trigger processing by id.
    let two_phase = std::env::var("VIDEOTTO_TWO_PHASE")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let input = if two_phase {
        let transport = HttpUpload::new(&config)?;
        let job_id = transport
            .upload(&file_name, bytes, &mut |event| {
                info!("Upload event: {:?}", event);
            })
            .await?;
        SubmitInput::Uploaded(job_id)
    } else {
        SubmitInput::Multipart { file_name, bytes }
    };

    let orchestrator = JobLifecycleOrchestrator::new(config)?;
    let mut states = orchestrator.subscribe();
    orchestrator.submit(input)?;

    loop {
        let state = *states.borrow_and_update();
        println!("status: {}", state);
        if state.is_terminal() {
            break;
        }
        if states.changed().await.is_err() {
            break;
        }
    }

    let state = orchestrator.state();
    if !matches!(state, videotto_client::LifecycleState::Completed) {
        if let Some(job) = orchestrator.job() {
            if let Some(message) = job.error_message {
                error!("Job ended in {}: {}", state, message);
            }
        }
        std::process::exit(1);
    }

    let clips = orchestrator.clips();
    println!("{} clip(s):", clips.len());
    for clip in &clips {
        println!("  [{:>8.2}s - {:>8.2}s] {}", clip.start, clip.end, clip.reason);
    }

    Ok(())
}
