// SPDX-License-Identifier: MPL-2.0
//! Transport and input state machine.
//!
//! Translates user input (controls, keyboard, pointer, scrubber) into
//! [`Effect`]s for the engine to execute, and keeps [`PlaybackState`] in
//! sync with what the primary surface reports. It never touches a port
//! directly.
//!
//! # Controls visibility
//!
//! Outside fullscreen the controls are always shown. In either fullscreen
//! mode, pointer activity and keyboard shortcuts show them and re-arm the
//! idle timer; when it fires they hide. Leaving the player surface hides
//! them immediately.

use super::fullscreen::{FullscreenInput, FullscreenRequest};
use super::scrubber::{Scrubber, TrackGeometry};
use super::state::PlaybackState;
use super::time_units::fraction_to_secs;
use super::timer::SingleShotTimer;
use crate::config::EngineSettings;
use crate::domain::stream::LevelSelection;
use crate::domain::ui::IdleTimeout;
use crate::domain::video::{KeyboardSeekStep, Volume};
use std::time::Instant;

/// Keys the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

/// User input for the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    Play,
    Pause,
    /// Absolute seek in seconds.
    SeekTo(f64),
    /// Relative seek in seconds.
    SeekBy(f64),
    SetVolume(Volume),
    ToggleMute,
    ToggleWindowFullscreen,
    TogglePlayerFullscreen,
    KeyPressed {
        key: Key,
        /// A text field owns the keyboard; shortcuts are ignored.
        text_input_focused: bool,
    },
    /// Pointer moved anywhere over the player.
    PointerMoved,
    /// Pointer left the player surface.
    PointerLeft,
    /// The video surface itself was clicked.
    SurfaceClicked,
    ToggleQualityMenu,
    /// Click outside the open quality menu.
    DismissQualityMenu,
    SelectLevel(LevelSelection),
    /// The scrub track was laid out.
    ScrubTrackResized(TrackGeometry),
    ScrubEntered,
    ScrubLeft,
    /// Pointer x over the track, or anywhere in the window while dragging.
    ScrubMoved(f32),
    ScrubPressed(f32),
    /// Pointer released anywhere in the window.
    ScrubReleased,
}

/// Commands for the engine to carry out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Play,
    Pause,
    Seek(f64),
    SetVolume(Volume),
    SetMuted(bool),
    Fullscreen(FullscreenRequest),
    SelectLevel(LevelSelection),
    StartPreview,
    StopPreview,
    PreviewSeek(f64),
}

/// The transport state machine.
#[derive(Debug, Clone)]
pub struct Transport {
    state: PlaybackState,
    idle_timer: SingleShotTimer,
    idle_timeout: IdleTimeout,
    seek_step: KeyboardSeekStep,
    volume_step: f32,
    /// Restored on unmute when the slider was dragged to zero.
    last_audible_volume: Volume,
    scrubber: Scrubber,
    /// Set after a terminal stream fault; play, pause and seek become no-ops.
    playback_locked: bool,
}

impl Transport {
    #[must_use]
    pub fn new(settings: &EngineSettings) -> Self {
        let initial = settings.initial_volume;
        Self {
            state: PlaybackState::new(initial),
            idle_timer: SingleShotTimer::new(),
            idle_timeout: settings.idle_timeout,
            seek_step: settings.seek_step,
            volume_step: settings.volume_step,
            last_audible_volume: if initial.is_silent() {
                Volume::default()
            } else {
                initial
            },
            scrubber: Scrubber::default(),
            playback_locked: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn scrubber(&self) -> &Scrubber {
        &self.scrubber
    }

    /// Next idle deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.idle_timer.deadline()
    }

    /// Handles one input and returns the effects to execute.
    pub fn handle(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        match message {
            Message::TogglePlayback => self.toggle_playback(),
            Message::Play => self.play(),
            Message::Pause => self.pause(),
            Message::SeekTo(secs) => self.seek_to(secs),
            Message::SeekBy(delta) => self.seek_to(self.state.current_time_secs + delta),
            Message::SetVolume(volume) => self.apply_volume(volume),
            Message::ToggleMute => self.toggle_mute(),
            Message::ToggleWindowFullscreen => {
                self.fullscreen(FullscreenInput::ToggleWindow, now)
            }
            Message::TogglePlayerFullscreen => {
                self.fullscreen(FullscreenInput::ToggleDocument, now)
            }
            Message::KeyPressed {
                key,
                text_input_focused,
            } => {
                if text_input_focused {
                    return Vec::new();
                }
                self.key_pressed(key, now)
            }
            Message::PointerMoved => {
                self.reset_idle(now);
                Vec::new()
            }
            Message::PointerLeft => {
                if self.state.fullscreen.any() {
                    self.idle_timer.cancel();
                    self.state.controls_visible = false;
                }
                Vec::new()
            }
            Message::SurfaceClicked => {
                if self.state.fullscreen.any() {
                    self.state.controls_visible = !self.state.controls_visible;
                    if self.state.controls_visible {
                        self.idle_timer.arm(now, self.idle_timeout.as_duration());
                    } else {
                        self.idle_timer.cancel();
                    }
                }
                Vec::new()
            }
            Message::ToggleQualityMenu => {
                self.state.quality_menu_open = !self.state.quality_menu_open;
                Vec::new()
            }
            Message::DismissQualityMenu => {
                self.state.quality_menu_open = false;
                Vec::new()
            }
            Message::SelectLevel(selection) => {
                self.state.quality_menu_open = false;
                vec![Effect::SelectLevel(selection)]
            }
            Message::ScrubTrackResized(track) => {
                self.scrubber.set_track(track);
                Vec::new()
            }
            Message::ScrubEntered => {
                if self.scrubber.pointer_entered() {
                    vec![Effect::StartPreview]
                } else {
                    Vec::new()
                }
            }
            Message::ScrubLeft => {
                if self.scrubber.pointer_left() {
                    vec![Effect::StopPreview]
                } else {
                    Vec::new()
                }
            }
            Message::ScrubMoved(x) => self.scrub_moved(x),
            Message::ScrubPressed(x) => {
                let fraction = self.scrubber.press(x);
                log::trace!("Scrub drag started at {fraction:.3}");
                self.seek_to(fraction_to_secs(fraction, self.state.duration_secs))
            }
            Message::ScrubReleased => {
                if !self.scrubber.release() {
                    return Vec::new();
                }
                log::debug!("Scrub drag ended at {:.2}s", self.state.current_time_secs);
                if self.scrubber.preview_active() {
                    Vec::new()
                } else {
                    vec![Effect::StopPreview]
                }
            }
        }
    }

    /// Fires the idle timer. Returns true if the controls were hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.idle_timer.fire_if_due(now) {
            return false;
        }
        if self.state.fullscreen.any() && self.state.controls_visible {
            log::trace!("Idle timeout, hiding controls");
            self.state.controls_visible = false;
            return true;
        }
        false
    }

    /// Applies an externally reported fullscreen change.
    pub fn fullscreen_changed(&mut self, input: FullscreenInput, now: Instant) {
        let effects = self.fullscreen(input, now);
        debug_assert!(effects.is_empty());
    }

    /// Records a quality level accepted by the ladder engine.
    pub fn level_applied(&mut self, selection: LevelSelection) {
        self.state.selected_level = selection;
    }

    /// Stops reacting to play, pause and seek input.
    pub fn lock_playback(&mut self) {
        self.playback_locked = true;
    }

    #[must_use]
    pub fn is_playback_locked(&self) -> bool {
        self.playback_locked
    }

    /// Forgets everything tied to the previous stream. Volume, fullscreen and
    /// controls visibility carry over.
    pub fn reset_media(&mut self) {
        let state = &mut self.state;
        state.is_playing = false;
        state.current_time_secs = 0.0;
        state.duration_secs = 0.0;
        state.selected_level = LevelSelection::Auto;
        state.is_buffering = false;
        state.quality_menu_open = false;
        self.playback_locked = false;
    }

    /// Cancels the idle timer. Used on session teardown.
    pub fn cancel_timers(&mut self) {
        self.idle_timer.cancel();
    }

    // ---------------------------------------------------------------------
    // Surface reports
    // ---------------------------------------------------------------------

    pub fn on_playing(&mut self) {
        self.state.is_playing = true;
        self.state.is_buffering = false;
    }

    pub fn on_paused(&mut self) {
        self.state.is_playing = false;
    }

    pub fn on_time_update(&mut self, current_secs: f64) {
        if current_secs.is_finite() {
            self.state.current_time_secs = current_secs.max(0.0);
        }
    }

    pub fn on_duration(&mut self, duration_secs: f64) {
        self.state.duration_secs = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
    }

    pub fn on_waiting(&mut self) {
        self.state.is_buffering = true;
    }

    pub fn on_can_play(&mut self) {
        self.state.is_buffering = false;
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    fn toggle_playback(&mut self) -> Vec<Effect> {
        if self.state.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    fn play(&mut self) -> Vec<Effect> {
        if self.playback_locked || self.state.is_playing {
            Vec::new()
        } else {
            vec![Effect::Play]
        }
    }

    fn pause(&mut self) -> Vec<Effect> {
        if !self.playback_locked && self.state.is_playing {
            vec![Effect::Pause]
        } else {
            Vec::new()
        }
    }

    fn seek_to(&mut self, secs: f64) -> Vec<Effect> {
        if self.playback_locked || !secs.is_finite() {
            return Vec::new();
        }
        let duration = self.state.duration_secs;
        let target = if duration > 0.0 {
            secs.clamp(0.0, duration)
        } else {
            secs.max(0.0)
        };
        self.state.current_time_secs = target;
        vec![Effect::Seek(target)]
    }

    fn apply_volume(&mut self, volume: Volume) -> Vec<Effect> {
        self.state.volume = volume;
        self.state.is_muted = volume.is_silent();
        if !volume.is_silent() {
            self.last_audible_volume = volume;
        }
        vec![
            Effect::SetVolume(volume),
            Effect::SetMuted(self.state.is_muted),
        ]
    }

    fn toggle_mute(&mut self) -> Vec<Effect> {
        if self.state.is_muted {
            self.state.is_muted = false;
            if self.state.volume.is_silent() {
                self.state.volume = self.last_audible_volume;
            }
            vec![
                Effect::SetVolume(self.state.volume),
                Effect::SetMuted(false),
            ]
        } else {
            self.state.is_muted = true;
            vec![Effect::SetMuted(true)]
        }
    }

    fn key_pressed(&mut self, key: Key, now: Instant) -> Vec<Effect> {
        let effects = match key {
            Key::Space => self.toggle_playback(),
            Key::ArrowLeft => self.seek_to(self.state.current_time_secs - self.seek_step.value()),
            Key::ArrowRight => self.seek_to(self.state.current_time_secs + self.seek_step.value()),
            Key::ArrowUp => self.apply_volume(self.state.volume.step_by(self.volume_step)),
            Key::ArrowDown => self.apply_volume(self.state.volume.step_by(-self.volume_step)),
            Key::Escape => self.fullscreen(FullscreenInput::Escape, now),
            Key::Other => return Vec::new(),
        };
        self.reset_idle(now);
        effects
    }

    fn scrub_moved(&mut self, x: f32) -> Vec<Effect> {
        let fraction = self.scrubber.pointer_moved(x);
        let secs = fraction_to_secs(fraction, self.state.duration_secs);

        let mut effects = Vec::new();
        if self.scrubber.preview_active() {
            effects.push(Effect::PreviewSeek(secs));
        }
        if self.scrubber.is_dragging() {
            effects.extend(self.seek_to(secs));
        }
        effects
    }

    fn fullscreen(&mut self, input: FullscreenInput, now: Instant) -> Vec<Effect> {
        let was_fullscreen = self.state.fullscreen.any();
        let (next, requests) = self.state.fullscreen.transition(input);
        self.state.fullscreen = next;

        match (was_fullscreen, next.any()) {
            (false, true) => self.reset_idle(now),
            (true, false) => {
                self.idle_timer.cancel();
                self.state.controls_visible = true;
            }
            _ => {}
        }
        requests.into_iter().map(Effect::Fullscreen).collect()
    }

    fn reset_idle(&mut self, now: Instant) {
        self.state.controls_visible = true;
        if self.state.fullscreen.any() {
            self.idle_timer.arm(now, self.idle_timeout.as_duration());
        } else {
            self.idle_timer.cancel();
        }
    }
}
