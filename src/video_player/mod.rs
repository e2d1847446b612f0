// SPDX-License-Identifier: MPL-2.0
//! Adaptive playback engine for StreamLens.
//!
//! This module provides the headless engine behind the player surface: stream
//! attachment and quality levels, fault recovery, the scrub preview, the
//! transport state machine and the tokio driver that runs it all.

mod attachment;
pub mod buffer;
pub mod engine;
pub mod fullscreen;
pub mod overlay;
mod preview;
pub mod recovery;
pub mod scrubber;
mod state;
pub mod subscription;
pub mod time_units;
pub mod timer;
pub mod transport;

pub use attachment::{LadderOutcome, StreamAttachment};
pub use buffer::buffered_segments;
pub use engine::{
    EngineEvent, MediaEvent, Navigation, PlaybackEngine, Ports, PreviewEvent, QualityOption,
    SessionInfo, DOWNLOAD_INDICATOR,
};
pub use fullscreen::{FullscreenInput, FullscreenRequest, FullscreenState};
pub use overlay::LoadingOverlay;
pub use preview::ScrubPreview;
pub use recovery::RecoveryAction;
pub use scrubber::{Scrubber, TrackGeometry};
pub use state::PlaybackState;
pub use subscription::{channel, drive, EngineHandle};
pub use transport::{Effect, Key, Message, Transport};
