// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects that are
//! independent of any presentation or infrastructure concerns.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{KeyboardSeekStep, Volume};
