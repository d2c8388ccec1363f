//! Per-clip playback session state.

use videotto_models::Clip;

/// Transient state binding one media element to one clip interval.
///
/// Created when a clip is rendered, destroyed when the clip is
/// unmounted or its (start, end, source) triple changes. The effective
/// bounds are normalized here once: a malformed interval
/// (`end <= start`, negative or non-finite values) collapses to the
/// single point `start` rather than ever widening the playable range.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    source: String,
    clip: Clip,
    start: f64,
    end: f64,
    did_initial_seek: bool,
}

impl PlaybackSession {
    /// Create a session for a clip of the given source.
    pub fn new(source: impl Into<String>, clip: Clip) -> Self {
        let start = if clip.start.is_finite() {
            clip.start.max(0.0)
        } else {
            0.0
        };
        let end = if clip.end.is_finite() {
            clip.end.max(start)
        } else {
            start
        };

        Self {
            source: source.into(),
            clip,
            start,
            end,
            did_initial_seek: false,
        }
    }

    /// Whether this session already covers the given (source, clip) pair.
    pub fn matches(&self, source: &str, clip: &Clip) -> bool {
        self.source == source && &self.clip == clip
    }

    /// Effective lower bound in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Effective upper bound in seconds, always >= `start()`.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The clip this session was built from, raw values preserved.
    pub fn clip(&self) -> &Clip {
        &self.clip
    }

    /// The media source this session is bound to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the initial seek to `start` has been performed.
    pub fn did_initial_seek(&self) -> bool {
        self.did_initial_seek
    }

    pub(crate) fn mark_initial_seek(&mut self) {
        self.did_initial_seek = true;
    }
}
