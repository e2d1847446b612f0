// SPDX-License-Identifier: MPL-2.0
//! Loading overlay with the most recent diagnostic line.
//!
//! The transport layer in front of the stream emits free-form log lines while
//! it works. Only the latest line is kept; it is cleared as soon as playback
//! actually starts. A terminal fault keeps the overlay up.

/// What the loading overlay shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingOverlay {
    loading: bool,
    last_log: Option<String>,
    fault: Option<String>,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self {
            loading: true,
            last_log: None,
            fault: None,
        }
    }
}

impl LoadingOverlay {
    /// Returns true while the spinner should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.loading || self.fault.is_some()
    }

    /// The latest diagnostic line, if any.
    #[must_use]
    pub fn last_log(&self) -> Option<&str> {
        self.last_log.as_deref()
    }

    /// The terminal fault description, if the session failed.
    #[must_use]
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Replaces the diagnostic line.
    pub fn push_log(&mut self, message: String) {
        self.last_log = Some(message);
    }

    /// The surface stalled waiting for data.
    pub fn on_waiting(&mut self) {
        self.loading = true;
    }

    /// The surface has enough data to continue.
    pub fn on_can_play(&mut self) {
        self.loading = false;
    }

    /// Playback started: hide the spinner and drop the log.
    pub fn on_playing(&mut self) {
        if self.fault.is_some() {
            return;
        }
        self.loading = false;
        self.last_log = None;
    }

    /// The session failed for good. The last log line stays visible.
    pub fn on_fatal(&mut self, description: String) {
        self.loading = true;
        self.fault = Some(description);
    }

    /// A new stream is being attached.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
