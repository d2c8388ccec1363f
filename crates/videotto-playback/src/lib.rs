//! Clip-bounded media playback control.
//!
//! A [`ClipPlaybackController`] constrains a single shared media
//! element to behave as an independent player scoped to one clip's
//! `[start, end)` interval, regardless of the element's native
//! unrestricted seek range. Pure synchronous state machine; the
//! caller wires it to the element's native event signals.

pub mod controller;
pub mod media;
pub mod session;

pub use controller::{ClipPlaybackController, SEEK_TOLERANCE_SECS};
pub use media::MediaElement;
pub use session::PlaybackSession;
