//! Media element seam.

/// The caller-supplied media handle the controller drives.
///
/// The rendering layer owns the handle's lifetime; the controller only
/// borrows control of position and pause state. Exactly one controller
/// may drive a given handle at a time, so a rebound clip must tear the
/// old controller down before attaching a new one.
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Seek to the given position in seconds.
    fn set_current_time(&mut self, seconds: f64);

    /// Pause playback.
    fn pause(&mut self);

    /// Whether playback is currently paused.
    fn is_paused(&self) -> bool;
}
