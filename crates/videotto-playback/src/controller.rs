//! Clip-bounded playback controller.

use tracing::debug;

use videotto_models::Clip;

use crate::media::MediaElement;
use crate::session::PlaybackSession;

/// Positions closer to the target than this are not re-seeked, to
/// avoid redundant seeks from floating-point/update noise.
pub const SEEK_TOLERANCE_SECS: f64 = 0.1;

/// Makes one media element behave as an isolated player bounded to
/// `[start, end]` of its underlying source.
///
/// The controller reacts to the element's native signals (metadata
/// ready, user seeks, time updates, play initiation) and clamps the
/// position back into the clip interval whenever it escapes. After any
/// controller-driven mutation the position lies within
/// `[start(), end()]`; the bounds themselves are immutable inputs and
/// the effective playable range is never widened.
#[derive(Debug)]
pub struct ClipPlaybackController<M: MediaElement> {
    media: M,
    session: PlaybackSession,
}

impl<M: MediaElement> ClipPlaybackController<M> {
    /// Take exclusive control of a media element for one clip.
    pub fn new(media: M, source: impl Into<String>, clip: Clip) -> Self {
        Self {
            media,
            session: PlaybackSession::new(source, clip),
        }
    }

    /// Rebind to a new (source, clip) pair.
    ///
    /// A changed pair discards the session and starts fresh (the
    /// initial seek will run again); an unchanged pair is a no-op.
    pub fn rebind(&mut self, source: &str, clip: &Clip) {
        if self.session.matches(source, clip) {
            return;
        }
        debug!(source, "Rebinding playback controller to new clip");
        self.session = PlaybackSession::new(source, clip.clone());
    }

    /// Effective lower bound of the playable range.
    pub fn start(&self) -> f64 {
        self.session.start()
    }

    /// Effective upper bound of the playable range.
    pub fn end(&self) -> f64 {
        self.session.end()
    }

    /// The session currently bound.
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Current position of the underlying element.
    pub fn position(&self) -> f64 {
        self.media.current_time()
    }

    /// Read access to the underlying element.
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Release the underlying element (teardown).
    pub fn into_inner(self) -> M {
        self.media
    }

    /// Media metadata became available: perform the initial seek to
    /// `start` unless the element is already close enough.
    pub fn handle_metadata_loaded(&mut self) {
        let position = self.media.current_time();
        if (position - self.start()).abs() > SEEK_TOLERANCE_SECS {
            self.media.set_current_time(self.start());
        }
        self.session.mark_initial_seek();
    }

    /// A user-initiated seek landed: clamp it back into bounds.
    ///
    /// Seeking past `end` additionally pauses, so the user cannot
    /// scrub into the next clip's footage.
    pub fn handle_seek(&mut self) {
        let position = self.media.current_time();
        if position < self.start() {
            self.media.set_current_time(self.start());
        } else if position > self.end() {
            self.media.set_current_time(self.end());
            self.media.pause();
        }
    }

    /// Playback tick: stop at `end` and rewind to `start` so a replay
    /// starts the clip over instead of running into the next segment.
    pub fn handle_time_update(&mut self) {
        let position = self.media.current_time();
        if position >= self.end() {
            self.media.pause();
            self.media.set_current_time(self.start());
        }
    }

    /// Playback is starting: re-assert the `start` position if a stale
    /// out-of-bounds position was left over from a prior pause.
    pub fn handle_play(&mut self) {
        let position = self.media.current_time();
        if position < self.start() - SEEK_TOLERANCE_SECS || position >= self.end() {
            self.media.set_current_time(self.start());
        }
        if !self.session.did_initial_seek() {
            self.session.mark_initial_seek();
        }
    }
}
