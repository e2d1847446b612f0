// SPDX-License-Identifier: MPL-2.0
//! Decoding-ladder engine port.
//!
//! This module defines the narrow interface the player needs from an
//! adaptive streaming library: load a manifest, attach to a surface, pick a
//! level, restart loading, recover the decoder and shut down. Events flow
//! back through the host as [`LadderEvent`]s tagged with the
//! [`AttachmentId`] the instance was created for.

use crate::domain::error::LadderError;
use crate::domain::stream::{LevelSelection, RawLevel};
use std::collections::BTreeMap;
use std::time::Duration;

/// Which video element an engine instance feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    Primary,
    Preview,
}

/// Identifies one attachment of an engine instance to a surface.
///
/// Generations only grow, so events from replaced instances can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentId {
    pub role: SurfaceRole,
    pub generation: u64,
}

impl AttachmentId {
    #[must_use]
    pub fn primary(generation: u64) -> Self {
        Self {
            role: SurfaceRole::Primary,
            generation,
        }
    }

    #[must_use]
    pub fn preview(generation: u64) -> Self {
        Self {
            role: SurfaceRole::Preview,
            generation,
        }
    }
}

/// Construction parameters for a ladder engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderConfig {
    /// Forward buffer target.
    pub max_buffer_length: Duration,
    /// Hard ceiling for the forward buffer target.
    pub max_max_buffer_length: Duration,
    /// Forward buffer byte budget.
    pub max_buffer_size_bytes: u64,
    /// Already played media kept for cheap rewinds.
    pub back_buffer_length: Duration,
    /// Demux off the main thread when the library supports it.
    pub enable_worker: bool,
    /// First level to load; `None` lets the library estimate.
    pub start_level: Option<usize>,
    /// Never render above the surface's pixel size.
    pub cap_level_to_player_size: bool,
    pub auto_start_load: bool,
    /// Opaque request headers for manifest and segment fetches.
    pub headers: BTreeMap<String, String>,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_buffer_length: Duration::from_secs(30),
            max_max_buffer_length: Duration::from_secs(600),
            max_buffer_size_bytes: 60 * 1000 * 1000,
            back_buffer_length: Duration::ZERO,
            enable_worker: true,
            start_level: None,
            cap_level_to_player_size: false,
            auto_start_load: true,
            headers: BTreeMap::new(),
        }
    }
}

/// Notifications emitted by a ladder engine instance.
#[derive(Debug, Clone, PartialEq)]
pub enum LadderEvent {
    /// The manifest was parsed; levels are in manifest order.
    ManifestParsed(Vec<RawLevel>),
    Error(LadderError),
}

/// Port for one decoding-ladder engine instance.
///
/// An instance feeds exactly one surface. After `destroy()` the instance
/// must not be used again.
pub trait LadderEngine: Send {
    /// Starts fetching the manifest at `url`.
    fn load_source(&mut self, url: &str);

    /// Binds the instance to a surface.
    fn attach_media(&mut self, surface: SurfaceRole);

    /// Requests a level; the library may still adapt in automatic mode.
    fn set_level(&mut self, level: LevelSelection);

    /// Restarts segment loading after a network fault.
    fn start_load(&mut self);

    /// Re-initializes the decode pipeline in place after a media fault.
    fn recover_media_error(&mut self);

    /// Releases network and decode resources.
    fn destroy(&mut self);
}

/// Creates independent ladder engine instances.
pub trait LadderEngineFactory: Send + Sync {
    /// Returns true if adaptive playback is available in this runtime.
    fn is_supported(&self) -> bool;

    /// Creates a fresh instance; no two calls share decoding state.
    fn create(&self, id: AttachmentId, config: LadderConfig) -> Box<dyn LadderEngine>;
}
