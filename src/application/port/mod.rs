// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the engine remains
//! independent of any concrete media stack or windowing toolkit.
//!
//! # Available Ports
//!
//! - [`surface`]: Video elements (primary and scrub preview)
//! - [`ladder`]: Adaptive streaming (decoding-ladder) engines
//! - [`host`]: Window, document fullscreen and navigation callbacks
//!
//! # Design Notes
//!
//! - All traits are `Send` so the engine can live on a tokio task
//! - Commands return nothing; outcomes come back as engine events
//! - No `async fn`; the driver in `video_player::subscription` owns timing

pub mod host;
pub mod ladder;
pub mod surface;

// Re-export main types for convenience
pub use host::{DocumentFullscreen, SessionHost, WindowShell};
pub use ladder::{
    AttachmentId, LadderConfig, LadderEngine, LadderEngineFactory, LadderEvent, SurfaceRole,
};
pub use surface::{MediaSurface, PlayRequestId};
