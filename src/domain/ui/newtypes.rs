// SPDX-License-Identifier: MPL-2.0
//! UI timing newtypes.
//!
//! This module provides type-safe wrappers for the two quiescence windows
//! the player uses, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// IdleTimeout
// =============================================================================

/// Idle timeout bounds in milliseconds.
pub mod idle_timeout_bounds {
    /// Minimum idle timeout.
    pub const MIN_MS: u64 = 500;
    /// Maximum idle timeout.
    pub const MAX_MS: u64 = 30_000;
    /// Default idle timeout.
    pub const DEFAULT_MS: u64 = 3_000;
}

/// Pointer inactivity after which fullscreen controls are hidden.
///
/// # Example
///
/// ```
/// use stream_lens::domain::ui::IdleTimeout;
///
/// let timeout = IdleTimeout::new(5_000);
/// assert_eq!(timeout.as_millis(), 5_000);
///
/// // Values outside range are clamped
/// assert_eq!(IdleTimeout::new(100_000).as_millis(), 30_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimeout(u64);

impl IdleTimeout {
    /// Creates a new idle timeout, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(
            idle_timeout_bounds::MIN_MS,
            idle_timeout_bounds::MAX_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self(idle_timeout_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// PreviewDebounce
// =============================================================================

/// Scrub preview debounce bounds in milliseconds.
pub mod preview_debounce_bounds {
    /// Minimum debounce window.
    pub const MIN_MS: u64 = 10;
    /// Maximum debounce window.
    pub const MAX_MS: u64 = 1_000;
    /// Default debounce window.
    pub const DEFAULT_MS: u64 = 100;
}

/// Quiescence window that coalesces scrub preview seeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewDebounce(u64);

impl PreviewDebounce {
    /// Creates a new debounce window, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(
            preview_debounce_bounds::MIN_MS,
            preview_debounce_bounds::MAX_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the window as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PreviewDebounce {
    fn default() -> Self {
        Self(preview_debounce_bounds::DEFAULT_MS)
    }
}
