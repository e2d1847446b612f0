// SPDX-License-Identifier: MPL-2.0
//! Scrub track geometry and pointer tracking.
//!
//! The host reports the track rectangle once laid out and forwards raw
//! pointer x coordinates. Everything visual (hover bar, tooltip position,
//! tooltip text) is derived here so the host only renders numbers.

use super::time_units::{format_time, fraction_to_secs};
use crate::config::defaults::SCRUB_TOOLTIP_WIDTH_PX;

/// Horizontal extent of the scrub track in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f32,
    pub width: f32,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            width: width.max(0.0),
        }
    }

    /// Fraction of the track under `x`, clamped to the track bounds.
    #[must_use]
    pub fn fraction_at(&self, x: f32) -> f64 {
        if self.width <= 0.0 || !x.is_finite() {
            return 0.0;
        }
        let offset = (x - self.left).clamp(0.0, self.width);
        f64::from(offset) / f64::from(self.width)
    }

    /// Left edge of the centred tooltip, kept inside the track.
    #[must_use]
    pub fn tooltip_left(&self, fraction: f64) -> f32 {
        let half = SCRUB_TOOLTIP_WIDTH_PX / 2.0;
        let centre = fraction.clamp(0.0, 1.0) as f32 * self.width;
        centre.min(self.width - half).max(half)
    }
}

/// Pointer state over the scrub track.
#[derive(Debug, Clone, Default)]
pub struct Scrubber {
    track: Option<TrackGeometry>,
    hovering: bool,
    dragging: bool,
    hover_fraction: f64,
}

impl Scrubber {
    pub fn set_track(&mut self, track: TrackGeometry) {
        self.track = Some(track);
    }

    /// Returns true if the preview should start.
    pub fn pointer_entered(&mut self) -> bool {
        let was_active = self.preview_active();
        self.hovering = true;
        !was_active
    }

    /// Returns true if the preview should stop.
    pub fn pointer_left(&mut self) -> bool {
        let was_active = self.preview_active();
        self.hovering = false;
        was_active && !self.preview_active()
    }

    /// Records a pointer move and returns the fraction under it.
    pub fn pointer_moved(&mut self, x: f32) -> f64 {
        self.hover_fraction = self.track.map_or(0.0, |track| track.fraction_at(x));
        self.hover_fraction
    }

    /// Starts a drag at `x`; returns the fraction to seek to.
    pub fn press(&mut self, x: f32) -> f64 {
        self.dragging = true;
        self.pointer_moved(x)
    }

    /// Ends the drag. Returns true if a drag was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.dragging)
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The preview runs while the pointer hovers or drags the track.
    #[must_use]
    pub fn preview_active(&self) -> bool {
        self.hovering || self.dragging
    }

    /// Width of the hover ("ghost") bar as a fraction of the track.
    #[must_use]
    pub fn hover_fraction(&self) -> f64 {
        self.hover_fraction
    }

    /// Tooltip left edge in track-local pixels, if the track is known.
    #[must_use]
    pub fn tooltip_left(&self) -> Option<f32> {
        self.track.map(|track| track.tooltip_left(self.hover_fraction))
    }

    /// Tooltip text for the hovered position.
    #[must_use]
    pub fn tooltip_text(&self, duration_secs: f64) -> String {
        format_time(fraction_to_secs(self.hover_fraction, duration_secs))
    }
}
