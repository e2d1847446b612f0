// SPDX-License-Identifier: MPL-2.0
//! Fault recovery policy for adaptive playback.
//!
//! Only fatal ladder faults trigger an action. Network faults restart segment
//! loading, media faults re-initialize the decoder in place, anything else is
//! terminal for the session. Direct (non-adaptive) playback relies on the
//! surface's own error handling and never reaches this policy.

use crate::domain::error::{LadderError, LadderErrorKind};

/// What the attachment manager must do about a ladder fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Non-fatal: log and keep streaming.
    Ignore,
    /// Restart segment loading on the same instance.
    Reload,
    /// Recover the decode pipeline without reattaching.
    RecoverMedia,
    /// Destroy the instance; no further automatic recovery.
    Destroy,
}

impl RecoveryAction {
    /// Returns true if the session cannot continue after this action.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Destroy)
    }
}

/// Classifies a ladder fault.
#[must_use]
pub fn classify(error: &LadderError) -> RecoveryAction {
    if !error.fatal {
        return RecoveryAction::Ignore;
    }
    match error.kind {
        LadderErrorKind::Network => RecoveryAction::Reload,
        LadderErrorKind::Media => RecoveryAction::RecoverMedia,
        LadderErrorKind::Other => RecoveryAction::Destroy,
    }
}
