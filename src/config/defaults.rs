// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Controls**: Idle auto-hide and scrub preview debounce
//! - **Transport**: Keyboard seek and volume steps
//! - **Buffer**: Forward and back buffer targets for adaptive playback

use crate::domain::ui::newtypes::{idle_timeout_bounds, preview_debounce_bounds};
use crate::domain::video::newtypes::{seek_step_bounds, volume_bounds};

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Pointer inactivity before fullscreen controls hide (milliseconds).
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = idle_timeout_bounds::DEFAULT_MS;

/// Quiescence window for scrub preview seeks (milliseconds).
pub const DEFAULT_PREVIEW_DEBOUNCE_MS: u64 = preview_debounce_bounds::DEFAULT_MS;

/// Opacity of the preview surface while a seek is settling.
pub const PREVIEW_SETTLING_OPACITY: f32 = 0.4;

/// Width of the scrub tooltip in pixels, used to keep it inside the track.
pub const SCRUB_TOOLTIP_WIDTH_PX: f32 = 160.0;

// ==========================================================================
// Transport Defaults
// ==========================================================================

/// Relative seek applied by the left/right arrow keys (seconds).
pub const DEFAULT_KEYBOARD_SEEK_STEP_SECS: f64 = seek_step_bounds::DEFAULT;

/// Volume change applied by the up/down arrow keys.
pub const DEFAULT_VOLUME_STEP: f32 = volume_bounds::STEP;

/// Initial playback volume.
pub const DEFAULT_VOLUME: f32 = volume_bounds::DEFAULT;

// ==========================================================================
// Buffer Defaults
// ==========================================================================

/// Forward buffer target (30 minutes).
pub const DEFAULT_MAX_BUFFER_SECS: u64 = 1_800;

/// Ceiling for the forward buffer target.
pub const DEFAULT_MAX_MAX_BUFFER_SECS: u64 = 1_800;

/// Forward buffer byte budget (about 1 GB).
pub const DEFAULT_MAX_BUFFER_BYTES: u64 = 1_000 * 1_000 * 1_000;

/// Played media retained behind the playhead.
pub const DEFAULT_BACK_BUFFER_SECS: u64 = 90;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_IDLE_TIMEOUT_MS >= idle_timeout_bounds::MIN_MS);
    assert!(DEFAULT_IDLE_TIMEOUT_MS <= idle_timeout_bounds::MAX_MS);
    assert!(DEFAULT_PREVIEW_DEBOUNCE_MS >= preview_debounce_bounds::MIN_MS);
    assert!(DEFAULT_PREVIEW_DEBOUNCE_MS <= preview_debounce_bounds::MAX_MS);
    assert!(DEFAULT_PREVIEW_DEBOUNCE_MS < DEFAULT_IDLE_TIMEOUT_MS);

    assert!(DEFAULT_MAX_MAX_BUFFER_SECS >= DEFAULT_MAX_BUFFER_SECS);
    assert!(DEFAULT_MAX_BUFFER_BYTES > 0);
};
