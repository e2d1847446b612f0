// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
    /// Volume adjustment step per key press (10%).
    pub const STEP: f32 = 0.1;
    /// Values below this are treated as silence and snapped to zero.
    pub const MUTE_THRESHOLD: f32 = 0.001;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// Values below the audible threshold are stored as exactly `0.0`, so
/// repeated keyboard steps always land on a true zero.
///
/// # Example
///
/// ```
/// use stream_lens::domain::video::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Silence.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self::ZERO;
        }
        let clamped = volume.clamp(volume_bounds::MIN, volume_bounds::MAX);
        if clamped < volume_bounds::MUTE_THRESHOLD {
            Self::ZERO
        } else {
            Self(clamped)
        }
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the volume is silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == 0.0
    }

    /// Moves the volume by `delta`, clamping to the valid range.
    #[must_use]
    pub fn step_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// KeyboardSeekStep
// =============================================================================

/// Keyboard seek step bounds (0.5 to 30.0 seconds).
pub mod seek_step_bounds {
    /// Minimum keyboard seek step in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum keyboard seek step in seconds.
    pub const MAX: f64 = 30.0;
    /// Default keyboard seek step in seconds.
    pub const DEFAULT: f64 = 5.0;
}

/// Keyboard seek step in seconds for the arrow-key relative seek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSeekStep(f64);

impl KeyboardSeekStep {
    /// Creates a new keyboard seek step value, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for KeyboardSeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
