// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Stream fault types ([`LadderError`](error::LadderError),
//!   [`PlayError`](error::PlayError))
//! - [`stream`]: Stream descriptors, quality levels and buffered ranges
//! - [`ui`]: UI timing value objects ([`IdleTimeout`](ui::IdleTimeout),
//!   [`PreviewDebounce`](ui::PreviewDebounce))
//! - [`video`]: Playback value objects ([`Volume`](video::Volume),
//!   [`KeyboardSeekStep`](video::KeyboardSeekStep))

pub mod error;
pub mod stream;
pub mod ui;
pub mod video;
