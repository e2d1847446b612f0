// SPDX-License-Identifier: MPL-2.0
//! Single-shot deadline timer.
//!
//! The engine never sleeps. Timers are plain deadlines that the host's event
//! loop (or [`super::subscription::drive`]) checks by calling `tick(now)`.
//! Arming always replaces the previous deadline, so a timer can never fire
//! twice for one arm.

use std::time::{Duration, Instant};

/// A cancellable, re-armable single-shot timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleShotTimer {
    deadline: Option<Instant>,
}

impl SingleShotTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any pending deadline and arms a new one at `now + after`.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Clears the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed, disarming the timer.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of two optional deadlines.
#[must_use]
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
