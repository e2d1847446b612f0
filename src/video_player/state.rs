// SPDX-License-Identifier: MPL-2.0
//! Playback state owned by the transport state machine.
//!
//! Only [`super::transport::Transport`] mutates this struct; the rest of the
//! engine reads it. It lives exactly as long as the playback session.

use super::fullscreen::FullscreenState;
use super::time_units::{format_time, secs_to_fraction};
use crate::domain::stream::LevelSelection;
use crate::domain::video::Volume;

/// Observable playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_time_secs: f64,
    pub duration_secs: f64,
    pub volume: Volume,
    pub is_muted: bool,
    pub selected_level: LevelSelection,
    pub fullscreen: FullscreenState,
    pub controls_visible: bool,
    pub is_buffering: bool,
    pub quality_menu_open: bool,
}

impl PlaybackState {
    #[must_use]
    pub fn new(volume: Volume) -> Self {
        Self {
            is_playing: false,
            current_time_secs: 0.0,
            duration_secs: 0.0,
            is_muted: volume.is_silent(),
            volume,
            selected_level: LevelSelection::Auto,
            fullscreen: FullscreenState::default(),
            controls_visible: true,
            is_buffering: false,
            quality_menu_open: false,
        }
    }

    #[must_use]
    pub fn is_window_fullscreen(&self) -> bool {
        self.fullscreen.window
    }

    #[must_use]
    pub fn is_document_fullscreen(&self) -> bool {
        self.fullscreen.document
    }

    /// Played share of the timeline (0 when the duration is unknown).
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        secs_to_fraction(self.current_time_secs, self.duration_secs)
    }

    /// `current / total` as shown in the transport bar.
    #[must_use]
    pub fn time_display(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.current_time_secs),
            format_time(self.duration_secs)
        )
    }

    /// The volume the output is actually playing at.
    #[must_use]
    pub fn effective_volume(&self) -> Volume {
        if self.is_muted {
            Volume::ZERO
        } else {
            self.volume
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(Volume::default())
    }
}
