// SPDX-License-Identifier: MPL-2.0
//! Scrub preview pipeline.
//!
//! A muted thumbnail surface that follows the hovered or dragged scrub
//! position. It owns its own surface and, for adaptive streams, its own
//! ladder engine instance created with the preview configuration (lowest
//! rung first, capped to the surface size). Nothing here is ever shared with
//! the primary attachment.
//!
//! Seeks are debounced: every request re-arms a single-shot timer and only
//! the latest target is applied when it fires. Deactivation cancels the timer
//! synchronously, so no seek can reach the surface after the session ends.
//!
//! All preview failures are swallowed.

use super::timer::SingleShotTimer;
use crate::application::port::{
    AttachmentId, LadderEngine, LadderEngineFactory, LadderEvent, MediaSurface, SurfaceRole,
};
use crate::config::defaults::PREVIEW_SETTLING_OPACITY;
use crate::config::EngineSettings;
use crate::domain::stream::StreamDescriptor;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Surface opacity before the first preview frame has settled.
const HIDDEN_OPACITY: f32 = 0.0;
const SETTLED_OPACITY: f32 = 1.0;

struct PreviewSession {
    id: AttachmentId,
    ladder: Option<Box<dyn LadderEngine>>,
    seek_in_flight: bool,
}

/// The scrub preview pipeline. At most one session exists at a time.
pub struct ScrubPreview {
    surface: Box<dyn MediaSurface>,
    factory: Arc<dyn LadderEngineFactory>,
    debounce: Duration,
    timer: SingleShotTimer,
    pending_secs: Option<f64>,
    next_generation: u64,
    session: Option<PreviewSession>,
    opacity: f32,
}

impl std::fmt::Debug for ScrubPreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrubPreview")
            .field("session", &self.session.as_ref().map(|s| s.id))
            .field("pending_secs", &self.pending_secs)
            .field("timer", &self.timer)
            .field("opacity", &self.opacity)
            .finish_non_exhaustive()
    }
}

impl ScrubPreview {
    #[must_use]
    pub fn new(
        surface: Box<dyn MediaSurface>,
        factory: Arc<dyn LadderEngineFactory>,
        debounce: Duration,
    ) -> Self {
        Self {
            surface,
            factory,
            debounce,
            timer: SingleShotTimer::new(),
            pending_secs: None,
            next_generation: 0,
            session: None,
            opacity: HIDDEN_OPACITY,
        }
    }

    /// Starts a session for `descriptor`. No-op while one is running.
    pub fn activate(&mut self, descriptor: &StreamDescriptor, settings: &EngineSettings) {
        if self.session.is_some() {
            return;
        }
        self.next_generation += 1;
        let id = AttachmentId::preview(self.next_generation);

        self.surface.set_muted(true);
        self.set_opacity(HIDDEN_OPACITY);

        let ladder = if descriptor.is_adaptive && self.factory.is_supported() {
            let mut ladder = self
                .factory
                .create(id, settings.preview_ladder_config(descriptor));
            ladder.load_source(&descriptor.url);
            ladder.attach_media(SurfaceRole::Preview);
            Some(ladder)
        } else {
            self.surface.set_source(&descriptor.url);
            self.surface.load();
            None
        };
        log::debug!("Preview session {:?} started", id);

        self.session = Some(PreviewSession {
            id,
            ladder,
            seek_in_flight: false,
        });
    }

    /// Tears the session down: timer cancelled, ladder destroyed, source cleared.
    pub fn deactivate(&mut self) {
        self.timer.cancel();
        self.pending_secs = None;
        let Some(mut session) = self.session.take() else {
            return;
        };
        if let Some(mut ladder) = session.ladder.take() {
            ladder.destroy();
        }
        self.surface.clear_source();
        self.set_opacity(HIDDEN_OPACITY);
        log::debug!("Preview session {:?} ended", session.id);
    }

    /// Queues a preview seek; only the last request within the debounce
    /// window is applied.
    pub fn request_seek(&mut self, now: Instant, position_secs: f64) {
        if self.session.is_none() || !position_secs.is_finite() {
            return;
        }
        self.pending_secs = Some(position_secs);
        self.timer.arm(now, self.debounce);
    }

    /// Applies the pending seek once the debounce window has elapsed.
    ///
    /// Returns true if a seek was issued.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }
        let (Some(session), Some(target)) = (self.session.as_mut(), self.pending_secs.take())
        else {
            return false;
        };
        session.seek_in_flight = true;
        self.surface.seek(target);
        log::trace!("Preview seek to {target:.2}s");
        self.set_opacity(PREVIEW_SETTLING_OPACITY);
        true
    }

    /// The preview surface finished seeking.
    ///
    /// Only a seek issued by the current session reveals the surface; a
    /// completion left over from an earlier session is dropped.
    pub fn on_seeked(&mut self) {
        let Some(session) = self.session.as_mut().filter(|s| s.seek_in_flight) else {
            return;
        };
        session.seek_in_flight = false;
        self.set_opacity(SETTLED_OPACITY);
    }

    /// The preview surface reported an error. Always swallowed.
    pub fn on_surface_error(&mut self, details: &str) {
        log::debug!("Preview surface error ignored: {details}");
    }

    /// Handles a notification from the preview ladder. Always swallowed.
    pub fn on_ladder_event(&mut self, id: AttachmentId, event: LadderEvent) {
        if self.session.as_ref().map(|s| s.id) != Some(id) {
            return;
        }
        match event {
            LadderEvent::ManifestParsed(levels) => {
                log::trace!("Preview manifest parsed ({} levels)", levels.len());
            }
            LadderEvent::Error(error) => log::debug!("Preview {error} ignored"),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
        self.surface.set_opacity(opacity);
    }
}

impl Drop for ScrubPreview {
    fn drop(&mut self) {
        self.deactivate();
    }
}
