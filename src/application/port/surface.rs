// SPDX-License-Identifier: MPL-2.0
//! Media surface port.
//!
//! A [`MediaSurface`] is the video element the engine drives: the primary
//! playback surface or the small scrub preview surface. Commands are
//! fire-and-forget; their outcomes come back to the engine as events.

use crate::domain::video::Volume;

/// Identifies one play request so its settlement can be matched later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayRequestId(pub u64);

/// Port for a video element.
///
/// # Lifecycle
///
/// 1. `set_source()` + `load()` for direct playback, or a ladder engine
///    attaches to the surface for adaptive playback
/// 2. `play()` / `pause()` / `seek()` while attached
/// 3. `clear_source()` detaches and releases the decoder
///
/// `play()` is asynchronous: the host must report its outcome with
/// `MediaEvent::PlaySettled` carrying the same [`PlayRequestId`].
pub trait MediaSurface: Send {
    /// Points the element at a URL without starting a load.
    fn set_source(&mut self, url: &str);

    /// Removes the source and resets the element.
    fn clear_source(&mut self);

    /// Starts loading the current source.
    fn load(&mut self);

    /// Requests playback.
    fn play(&mut self, request: PlayRequestId);

    /// Pauses playback immediately.
    fn pause(&mut self);

    /// Returns true while the element is paused.
    fn is_paused(&self) -> bool;

    /// Moves the playhead.
    fn seek(&mut self, position_secs: f64);

    /// Sets the output volume.
    fn set_volume(&mut self, volume: Volume);

    /// Sets the mute flag without touching the volume.
    fn set_muted(&mut self, muted: bool);

    /// Sets the rendering opacity (0.0–1.0). Only the preview surface uses it.
    fn set_opacity(&mut self, _opacity: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaSurface) {}

    #[test]
    fn play_request_ids_order_by_issue() {
        assert!(PlayRequestId(1) < PlayRequestId(2));
    }
}
