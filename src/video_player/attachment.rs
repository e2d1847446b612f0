// SPDX-License-Identifier: MPL-2.0
//! Stream attachment manager.
//!
//! Binds a [`StreamDescriptor`] to the primary surface, either directly
//! (progressive or local file) or through a decoding-ladder engine instance
//! (adaptive stream). Owns the published quality levels, applies the fault
//! recovery policy and guards play requests.
//!
//! Exactly one ladder engine instance backs the primary surface at a time:
//! the previous instance is always destroyed before a new one is created.

use super::recovery::{self, RecoveryAction};
use crate::application::port::{
    AttachmentId, LadderEngine, LadderEngineFactory, LadderEvent, MediaSurface, PlayRequestId,
    SurfaceRole,
};
use crate::config::EngineSettings;
use crate::domain::error::{LadderError, PlayError};
use crate::domain::stream::{LevelSelection, QualityLevel, StreamDescriptor};
use std::sync::Arc;

/// How a descriptor ended up attached.
enum Binding {
    /// The surface plays the URL itself.
    Direct,
    /// A ladder engine feeds the surface. `None` once destroyed after a
    /// terminal fault.
    Adaptive(Option<Box<dyn LadderEngine>>),
}

struct Attached {
    id: AttachmentId,
    descriptor: StreamDescriptor,
    binding: Binding,
    /// Published once per attachment, never modified afterwards.
    levels: Option<Vec<QualityLevel>>,
    failed: bool,
}

/// Result of routing a ladder notification.
#[derive(Debug, Clone, PartialEq)]
pub enum LadderOutcome {
    /// The event belongs to a replaced or unknown attachment.
    Stale,
    /// Levels were published for the first time.
    LevelsPublished,
    /// A repeated manifest notification; the published set is unchanged.
    LevelsAlreadyPublished,
    /// A fault was classified and handled.
    Fault {
        action: RecoveryAction,
        error: LadderError,
    },
}

/// Tracks play requests so pauses never race an unsettled play.
#[derive(Debug, Default)]
struct PlayGuard {
    next_request: u64,
    last_issued: Option<PlayRequestId>,
    in_flight: Option<PlayRequestId>,
    /// A request issued for an attachment that has since been torn down.
    orphaned: Option<PlayRequestId>,
    pause_on_settle: bool,
}

/// Binds streams to the primary surface.
pub struct StreamAttachment {
    factory: Arc<dyn LadderEngineFactory>,
    next_generation: u64,
    current: Option<Attached>,
    play: PlayGuard,
}

impl std::fmt::Debug for StreamAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamAttachment")
            .field("attachment", &self.current.as_ref().map(|a| a.id))
            .field("levels", &self.levels().len())
            .field("failed", &self.is_failed())
            .field("play", &self.play)
            .finish()
    }
}

impl StreamAttachment {
    #[must_use]
    pub fn new(factory: Arc<dyn LadderEngineFactory>) -> Self {
        Self {
            factory,
            next_generation: 0,
            current: None,
            play: PlayGuard::default(),
        }
    }

    /// Attaches `descriptor` to the surface.
    ///
    /// Idempotent per descriptor value: returns `false` and does nothing if
    /// the same descriptor is already attached. Any previous attachment is
    /// torn down first.
    pub fn attach(
        &mut self,
        descriptor: &StreamDescriptor,
        settings: &EngineSettings,
        surface: &mut dyn MediaSurface,
    ) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|current| &current.descriptor == descriptor)
        {
            return false;
        }
        self.detach(surface);

        self.next_generation += 1;
        let id = AttachmentId::primary(self.next_generation);

        let binding = if descriptor.is_adaptive && self.factory.is_supported() {
            let mut engine = self
                .factory
                .create(id, settings.primary_ladder_config(descriptor));
            engine.load_source(&descriptor.url);
            engine.attach_media(SurfaceRole::Primary);
            log::info!("Attached adaptive stream {} ({:?})", descriptor.url, id);
            Binding::Adaptive(Some(engine))
        } else {
            if descriptor.is_adaptive {
                log::warn!("Adaptive playback unavailable, playing {} directly", descriptor.url);
            }
            surface.set_source(&descriptor.url);
            surface.load();
            log::info!("Attached direct stream {} ({:?})", descriptor.url, id);
            Binding::Direct
        };

        let direct = matches!(binding, Binding::Direct);
        self.current = Some(Attached {
            id,
            descriptor: descriptor.clone(),
            binding,
            levels: None,
            failed: false,
        });

        // Adaptive playback starts once the manifest is parsed.
        if direct {
            self.safe_play(surface);
        }
        true
    }

    /// Tears down the current attachment, if any.
    ///
    /// The ladder instance is destroyed first. If a play request is still in
    /// flight the surface is paused only after it settles.
    pub fn detach(&mut self, surface: &mut dyn MediaSurface) {
        let Some(mut attached) = self.current.take() else {
            return;
        };
        if let Binding::Adaptive(Some(mut engine)) =
            std::mem::replace(&mut attached.binding, Binding::Direct)
        {
            engine.destroy();
        }

        match self.play.in_flight.take() {
            Some(request) => {
                self.play.orphaned = Some(request);
                self.play.pause_on_settle = false;
            }
            None => surface.pause(),
        }
        log::info!("Detached {:?}", attached.id);
    }

    /// Issues a play request unless one is pending or the surface is already playing.
    ///
    /// Returns true if a request was sent.
    pub fn safe_play(&mut self, surface: &mut dyn MediaSurface) -> bool {
        if !self.is_operational() {
            return false;
        }
        if self.play.in_flight.is_some() {
            // A newer intent supersedes a deferred pause.
            self.play.pause_on_settle = false;
            return false;
        }
        if !surface.is_paused() {
            return false;
        }

        self.play.next_request += 1;
        let request = PlayRequestId(self.play.next_request);
        self.play.in_flight = Some(request);
        self.play.last_issued = Some(request);
        surface.play(request);
        true
    }

    /// Pauses now, or right after the pending play request settles.
    ///
    /// Returns true if a pause was issued or scheduled.
    pub fn request_pause(&mut self, surface: &mut dyn MediaSurface) -> bool {
        if !self.is_operational() {
            return false;
        }
        if self.play.in_flight.is_some() {
            self.play.pause_on_settle = true;
            return true;
        }
        if surface.is_paused() {
            return false;
        }
        surface.pause();
        true
    }

    /// Handles the outcome of a play request.
    pub fn on_play_settled(
        &mut self,
        request: PlayRequestId,
        result: Result<(), PlayError>,
        surface: &mut dyn MediaSurface,
    ) {
        if self.play.in_flight == Some(request) {
            self.play.in_flight = None;
            if std::mem::take(&mut self.play.pause_on_settle) {
                surface.pause();
            }
        } else if self.play.orphaned == Some(request) {
            self.play.orphaned = None;
            // Only pause if nothing newer has asked the surface to play.
            if self.play.last_issued == Some(request) {
                surface.pause();
            }
        } else {
            log::trace!("Ignoring settlement of unknown play request {:?}", request);
            return;
        }

        match result {
            Ok(()) => {}
            Err(err) if err.is_abort() => log::debug!("{err}"),
            Err(err) => log::error!("Playback error: {err}"),
        }
    }

    /// Routes a ladder notification to the current attachment.
    pub fn on_ladder_event(
        &mut self,
        id: AttachmentId,
        event: LadderEvent,
        surface: &mut dyn MediaSurface,
    ) -> LadderOutcome {
        let Some(attached) = self.current.as_mut().filter(|a| a.id == id) else {
            log::trace!("Dropping ladder event for stale {:?}", id);
            return LadderOutcome::Stale;
        };

        match event {
            LadderEvent::ManifestParsed(raw) => {
                if attached.failed {
                    return LadderOutcome::Stale;
                }
                if attached.levels.is_some() {
                    return LadderOutcome::LevelsAlreadyPublished;
                }
                let levels = QualityLevel::from_manifest(&raw);
                log::info!("Manifest parsed with {} levels", levels.len());
                attached.levels = Some(levels);
                self.safe_play(surface);
                LadderOutcome::LevelsPublished
            }
            LadderEvent::Error(error) => {
                let action = recovery::classify(&error);
                let engine = match &mut attached.binding {
                    Binding::Adaptive(Some(engine)) => engine,
                    _ => return LadderOutcome::Stale,
                };
                match action {
                    RecoveryAction::Ignore => log::debug!("Ignoring {error}"),
                    RecoveryAction::Reload => {
                        log::warn!("{error}, restarting segment loading");
                        engine.start_load();
                    }
                    RecoveryAction::RecoverMedia => {
                        log::warn!("{error}, recovering decoder");
                        engine.recover_media_error();
                    }
                    RecoveryAction::Destroy => {
                        log::error!("Unrecoverable stream error: {error}");
                        if let Binding::Adaptive(Some(mut engine)) =
                            std::mem::replace(&mut attached.binding, Binding::Adaptive(None))
                        {
                            engine.destroy();
                        }
                        attached.failed = true;
                    }
                }
                LadderOutcome::Fault { action, error }
            }
        }
    }

    /// Requests a quality level on the ladder engine.
    ///
    /// Ignored until levels are published, for unknown rungs, for direct
    /// playback and after a terminal fault. Returns true if forwarded.
    pub fn select_level(&mut self, selection: LevelSelection) -> bool {
        let Some(attached) = self.current.as_mut() else {
            return false;
        };
        let Some(levels) = attached.levels.as_ref() else {
            log::debug!("Level selection before manifest parse ignored");
            return false;
        };
        if let LevelSelection::Fixed(index) = selection {
            if !levels.iter().any(|level| level.index == index) {
                log::warn!("Unknown level {index} requested");
                return false;
            }
        }
        match &mut attached.binding {
            Binding::Adaptive(Some(engine)) => {
                engine.set_level(selection);
                true
            }
            _ => false,
        }
    }

    /// Published levels, sorted best first. Empty before the manifest parse.
    #[must_use]
    pub fn levels(&self) -> &[QualityLevel] {
        self.current
            .as_ref()
            .and_then(|a| a.levels.as_deref())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn current_id(&self) -> Option<AttachmentId> {
        self.current.as_ref().map(|a| a.id)
    }

    /// True after a terminal fault destroyed the ladder engine.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.current.as_ref().is_some_and(|a| a.failed)
    }

    /// True while a stream is attached and has not failed.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.current.as_ref().is_some_and(|a| !a.failed)
    }

    /// True while a play request awaits settlement.
    #[must_use]
    pub fn play_in_flight(&self) -> bool {
        self.play.in_flight.is_some()
    }

    /// True while any play request, including one orphaned by a detach, has
    /// not settled yet.
    #[must_use]
    pub fn awaiting_settlement(&self) -> bool {
        self.play.in_flight.is_some() || self.play.orphaned.is_some()
    }
}

impl Drop for StreamAttachment {
    fn drop(&mut self) {
        if let Some(Attached {
            binding: Binding::Adaptive(Some(mut engine)),
            ..
        }) = self.current.take()
        {
            engine.destroy();
        }
    }
}
