//! Result clip model.

use serde::{Deserialize, Serialize};

/// A highlighted sub-interval of the source video.
///
/// Produced atomically as part of a job's result set and never mutated
/// afterwards. The backend contract guarantees `end > start`; a
/// violation is tolerated defensively by consumers (the playback layer
/// clamps, it never panics), so the raw values are kept observable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Start of the interval in seconds from the beginning of the source
    pub start: f64,
    /// End of the interval in seconds, exclusive
    pub end: f64,
    /// Free-text justification for why this interval was selected
    pub reason: String,
}

impl Clip {
    /// Create a new clip.
    pub fn new(start: f64, end: f64, reason: impl Into<String>) -> Self {
        Self {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Check the backend contract invariant (`end > start`, `start >= 0`).
    pub fn is_well_formed(&self) -> bool {
        self.start >= 0.0 && self.end > self.start && self.start.is_finite() && self.end.is_finite()
    }

    /// Clip duration in seconds, zero for malformed intervals.
    pub fn duration(&self) -> f64 {
        if self.is_well_formed() {
            self.end - self.start
        } else {
            0.0
        }
    }
}
