// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the playback engine depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Media backends and window shells implement application layer ports
//! - The engine in [`crate::video_player`] only sees the traits
//!
//! # Example
//!
//! ```ignore
//! use stream_lens::application::port::{LadderEngineFactory, MediaSurface};
//!
//! // A media backend implements the port traits
//! struct WebviewSurface { /* ... */ }
//! impl MediaSurface for WebviewSurface { /* ... */ }
//! ```

pub mod port;
