//! Shared data models for the Videotto client core.
//!
//! This crate provides Serde-serializable types for:
//! - Jobs and their remote processing status
//! - Result clips (highlighted sub-intervals of the source video)
//! - HTTP wire payloads exchanged with the processing backend

pub mod clip;
pub mod job;
pub mod wire;

// Re-export common types
pub use clip::Clip;
pub use job::{Job, JobId, JobStatus};
pub use wire::{ResultsResponse, StatusResponse, SubmitResponse};
