// SPDX-License-Identifier: MPL-2.0
//! Stream and playback fault types.

use std::fmt;

/// Category of a decoding-ladder engine fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderErrorKind {
    /// Manifest or segment fetch failed.
    Network,
    /// Decoder or media buffer failure on otherwise fetched data.
    Media,
    /// Anything else (mux, key system, internal).
    Other,
}

/// A fault reported by the decoding-ladder engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderError {
    pub kind: LadderErrorKind,
    /// Fatal faults stop the engine until acted upon.
    pub fatal: bool,
    pub details: String,
}

impl LadderError {
    #[must_use]
    pub fn fatal(kind: LadderErrorKind, details: impl Into<String>) -> Self {
        Self {
            kind,
            fatal: true,
            details: details.into(),
        }
    }

    #[must_use]
    pub fn non_fatal(kind: LadderErrorKind, details: impl Into<String>) -> Self {
        Self {
            kind,
            fatal: false,
            details: details.into(),
        }
    }
}

impl fmt::Display for LadderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderErrorKind::Network => write!(f, "network"),
            LadderErrorKind::Media => write!(f, "media"),
            LadderErrorKind::Other => write!(f, "other"),
        }
    }
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = if self.fatal { "fatal" } else { "non-fatal" };
        write!(f, "{} {} error: {}", severity, self.kind, self.details)
    }
}

/// Outcome of a rejected play request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// The request was interrupted by a pause, a source change or teardown.
    Aborted,
    /// The surface refused to play (autoplay policy, unsupported source, ...).
    Rejected(String),
}

impl PlayError {
    /// Returns true for the interruption that teardown causes on purpose.
    #[must_use]
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Aborted => write!(f, "Play request aborted"),
            PlayError::Rejected(msg) => write!(f, "Play request rejected: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_error_display_includes_severity_and_kind() {
        let err = LadderError::fatal(LadderErrorKind::Network, "manifestLoadError");
        assert_eq!(format!("{}", err), "fatal network error: manifestLoadError");

        let err = LadderError::non_fatal(LadderErrorKind::Media, "bufferStalledError");
        assert!(!err.fatal);
        assert!(format!("{}", err).starts_with("non-fatal media"));
    }

    #[test]
    fn only_aborted_is_abort() {
        assert!(PlayError::Aborted.is_abort());
        assert!(!PlayError::Rejected("NotAllowedError".into()).is_abort());
    }
}
