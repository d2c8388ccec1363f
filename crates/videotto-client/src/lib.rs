//! Job lifecycle client for the Videotto processing backend.
//!
//! Turns a fire-and-forget submission into a reliable, terminating
//! lifecycle: submit -> obtain job id -> poll status -> fetch result
//! clips. The [`JobLifecycleOrchestrator`] is the entry point; it
//! exposes one observable [`LifecycleState`] to the presentation layer
//! and owns cancellation of superseded work.

pub mod api;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod poller;
pub mod upload;

pub use api::{ApiClient, SubmitInput};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use orchestrator::{JobLifecycleOrchestrator, LifecycleState};
pub use poller::{JobStatusPoller, PollOutcome};
pub use upload::{HttpUpload, UploadEvent, UploadTransport};
