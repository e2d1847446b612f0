// SPDX-License-Identifier: MPL-2.0
//! Playback engine composition root.
//!
//! [`PlaybackEngine`] wires the attachment manager, the transport state
//! machine, the scrub preview and the loading overlay to the injected ports.
//! The host feeds it [`EngineEvent`]s in arrival order together with the
//! current time, calls [`PlaybackEngine::tick`] when
//! [`PlaybackEngine::next_deadline`] passes, and renders from the getters.
//!
//! # Session end
//!
//! Closing, skipping to the next or previous episode and dropping the engine
//! all tear down the same way: preview session, primary attachment, timers,
//! then the host's stream cache. The navigation callback runs last.

use super::attachment::{LadderOutcome, StreamAttachment};
use super::buffer::buffered_segments;
use super::fullscreen::{FullscreenInput, FullscreenRequest};
use super::overlay::LoadingOverlay;
use super::preview::ScrubPreview;
use super::scrubber::Scrubber;
use super::state::PlaybackState;
use super::timer::earliest;
use super::transport::{Effect, Message, Transport};
use crate::application::port::{
    AttachmentId, DocumentFullscreen, LadderEngineFactory, LadderEvent, MediaSurface,
    PlayRequestId, SessionHost, SurfaceRole, WindowShell,
};
use crate::config::EngineSettings;
use crate::domain::error::PlayError;
use crate::domain::stream::{
    BufferedSegment, LevelSelection, QualityLevel, StreamDescriptor, TimeRange,
};
use std::sync::Arc;
use std::time::Instant;

/// Text of the indicator shown while playing a downloaded episode.
pub const DOWNLOAD_INDICATOR: &str = "PLAYING FROM DOWNLOAD";

/// Everything the application knows about the episode being played.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    pub descriptor: StreamDescriptor,
    pub episode_title: String,
    pub is_downloaded: bool,
    pub has_next: bool,
    pub has_prev: bool,
}

impl SessionInfo {
    /// A session without title or neighbours. Local files count as downloaded.
    #[must_use]
    pub fn new(descriptor: StreamDescriptor) -> Self {
        Self {
            is_downloaded: descriptor.is_local,
            descriptor,
            episode_title: String::new(),
            has_next: false,
            has_prev: false,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.episode_title = title.into();
        self
    }

    #[must_use]
    pub fn with_neighbours(mut self, has_prev: bool, has_next: bool) -> Self {
        self.has_prev = has_prev;
        self.has_next = has_next;
        self
    }
}

/// The capabilities the engine drives.
pub struct Ports {
    pub surface: Box<dyn MediaSurface>,
    pub preview_surface: Box<dyn MediaSurface>,
    pub ladder: Arc<dyn LadderEngineFactory>,
    pub window: Box<dyn WindowShell>,
    pub document: Box<dyn DocumentFullscreen>,
    pub host: Box<dyn SessionHost>,
}

/// Notifications from the primary surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// A play request resolved or rejected.
    PlaySettled {
        request: PlayRequestId,
        result: Result<(), PlayError>,
    },
    Playing,
    Paused,
    Ended,
    TimeUpdate(f64),
    DurationChanged(f64),
    /// Buffering progressed; carries every buffered range.
    Progress(Vec<TimeRange>),
    Waiting,
    CanPlay,
    /// Native element error. Direct playback has no recovery of its own.
    Error(String),
}

/// Notifications from the preview surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    Seeked,
    Error(String),
}

/// Navigation requested from the transport bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Close,
    Next,
    Prev,
}

/// Everything the engine reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Media(MediaEvent),
    Preview(PreviewEvent),
    Ladder {
        attachment: AttachmentId,
        event: LadderEvent,
    },
    Input(Message),
    Navigate(Navigation),
    WindowFullscreenChanged(bool),
    DocumentFullscreenChanged(bool),
    /// A diagnostic line from the transport layer in front of the stream.
    Log(String),
}

/// One entry of the quality menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityOption {
    pub selection: LevelSelection,
    pub label: String,
    pub selected: bool,
}

/// The headless adaptive playback engine.
pub struct PlaybackEngine {
    settings: EngineSettings,
    session: SessionInfo,
    surface: Box<dyn MediaSurface>,
    attachment: StreamAttachment,
    preview: ScrubPreview,
    transport: Transport,
    overlay: LoadingOverlay,
    buffered: Vec<TimeRange>,
    window: Box<dyn WindowShell>,
    document: Box<dyn DocumentFullscreen>,
    host: Box<dyn SessionHost>,
    ended: bool,
    source_released: bool,
}

impl std::fmt::Debug for PlaybackEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackEngine")
            .field("session", &self.session)
            .field("attachment", &self.attachment)
            .field("preview", &self.preview)
            .field("state", self.transport.state())
            .field("overlay", &self.overlay)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}

impl PlaybackEngine {
    /// Builds the engine and attaches the session's stream.
    #[must_use]
    pub fn new(ports: Ports, settings: EngineSettings, session: SessionInfo) -> Self {
        let Ports {
            mut surface,
            preview_surface,
            ladder,
            window,
            document,
            host,
        } = ports;

        let transport = Transport::new(&settings);
        surface.set_volume(transport.state().volume);
        surface.set_muted(transport.state().is_muted);

        let preview = ScrubPreview::new(
            preview_surface,
            Arc::clone(&ladder),
            settings.preview_debounce.as_duration(),
        );
        let mut engine = Self {
            attachment: StreamAttachment::new(ladder),
            preview,
            transport,
            overlay: LoadingOverlay::default(),
            buffered: Vec::new(),
            surface,
            window,
            document,
            host,
            settings,
            session,
            ended: false,
            source_released: false,
        };
        engine
            .attachment
            .attach(&engine.session.descriptor, &engine.settings, engine.surface.as_mut());
        engine
    }

    /// Switches to another episode without ending the session.
    ///
    /// The same descriptor only refreshes the display metadata.
    pub fn load(&mut self, session: SessionInfo) {
        if self.ended {
            log::warn!("Ignoring load after session end");
            return;
        }
        let same_stream = session.descriptor == self.session.descriptor;
        self.session = session;
        if same_stream {
            return;
        }

        self.preview.deactivate();
        self.overlay.reset();
        self.buffered.clear();
        self.transport.reset_media();
        self.attachment
            .attach(&self.session.descriptor, &self.settings, self.surface.as_mut());
    }

    /// Routes one event.
    pub fn handle(&mut self, event: EngineEvent, now: Instant) {
        if self.ended {
            // Orphaned play requests still need their deferred pause.
            if let EngineEvent::Media(MediaEvent::PlaySettled { request, result }) = event {
                self.attachment
                    .on_play_settled(request, result, self.surface.as_mut());
                self.release_source_once_settled();
            }
            return;
        }

        match event {
            EngineEvent::Media(event) => self.on_media(event),
            EngineEvent::Preview(PreviewEvent::Seeked) => self.preview.on_seeked(),
            EngineEvent::Preview(PreviewEvent::Error(details)) => {
                self.preview.on_surface_error(&details);
            }
            EngineEvent::Ladder { attachment, event } => self.on_ladder(attachment, event),
            EngineEvent::Input(message) => {
                let effects = self.transport.handle(message, now);
                for effect in effects {
                    self.execute(effect, now);
                }
            }
            EngineEvent::Navigate(navigation) => self.navigate(navigation),
            EngineEvent::WindowFullscreenChanged(on) => {
                self.transport
                    .fullscreen_changed(FullscreenInput::WindowChanged(on), now);
            }
            EngineEvent::DocumentFullscreenChanged(on) => {
                self.transport
                    .fullscreen_changed(FullscreenInput::DocumentChanged(on), now);
            }
            EngineEvent::Log(line) => self.overlay.push_log(line),
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.ended {
            return;
        }
        self.transport.tick(now);
        self.preview.tick(now);
    }

    /// The earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.ended {
            return None;
        }
        earliest(self.transport.deadline(), self.preview.deadline())
    }

    // ---------------------------------------------------------------------
    // View
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        self.transport.state()
    }

    #[must_use]
    pub fn overlay(&self) -> &LoadingOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn scrubber(&self) -> &Scrubber {
        self.transport.scrubber()
    }

    #[must_use]
    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    /// Published quality levels, best first.
    #[must_use]
    pub fn levels(&self) -> &[QualityLevel] {
        self.attachment.levels()
    }

    /// Quality menu entries: `Auto` first, then every level. Empty until
    /// levels are published.
    #[must_use]
    pub fn quality_options(&self) -> Vec<QualityOption> {
        let levels = self.attachment.levels();
        if levels.is_empty() {
            return Vec::new();
        }
        let selected = self.transport.state().selected_level;
        let auto = QualityOption {
            selection: LevelSelection::Auto,
            label: "Auto".to_string(),
            selected: selected == LevelSelection::Auto,
        };
        std::iter::once(auto)
            .chain(levels.iter().map(|level| QualityOption {
                selection: LevelSelection::Fixed(level.index),
                label: level.display_label(),
                selected: selected == LevelSelection::Fixed(level.index),
            }))
            .collect()
    }

    /// Buffered ranges as track fractions.
    #[must_use]
    pub fn buffered_segments(&self) -> Vec<BufferedSegment> {
        let is_local = self.session.is_downloaded || self.session.descriptor.is_local;
        buffered_segments(
            &self.buffered,
            self.transport.state().duration_secs,
            is_local,
        )
    }

    #[must_use]
    pub fn episode_title(&self) -> &str {
        &self.session.episode_title
    }

    #[must_use]
    pub fn download_indicator(&self) -> Option<&'static str> {
        self.session.is_downloaded.then_some(DOWNLOAD_INDICATOR)
    }

    #[must_use]
    pub fn preview_opacity(&self) -> f32 {
        self.preview.opacity()
    }

    #[must_use]
    pub fn is_preview_active(&self) -> bool {
        self.preview.is_active()
    }

    /// The primary attachment currently accepting ladder events.
    #[must_use]
    pub fn current_attachment(&self) -> Option<AttachmentId> {
        self.attachment.current_id()
    }

    /// True after a terminal stream fault.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.attachment.is_failed()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// True while a play request issued to the primary surface has not
    /// settled. Stays true after the session ends until the request detached
    /// by teardown settles and its deferred pause has been applied.
    #[must_use]
    pub fn awaiting_settlement(&self) -> bool {
        self.attachment.awaiting_settlement()
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn on_media(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::PlaySettled { request, result } => {
                self.attachment
                    .on_play_settled(request, result, self.surface.as_mut());
            }
            MediaEvent::Playing => {
                self.transport.on_playing();
                self.overlay.on_playing();
            }
            MediaEvent::Paused | MediaEvent::Ended => self.transport.on_paused(),
            MediaEvent::TimeUpdate(secs) => self.transport.on_time_update(secs),
            MediaEvent::DurationChanged(secs) => self.transport.on_duration(secs),
            MediaEvent::Progress(ranges) => self.buffered = ranges,
            MediaEvent::Waiting => {
                self.transport.on_waiting();
                self.overlay.on_waiting();
            }
            MediaEvent::CanPlay => {
                self.transport.on_can_play();
                self.overlay.on_can_play();
            }
            MediaEvent::Error(details) => log::error!("Media surface error: {details}"),
        }
    }

    fn on_ladder(&mut self, id: AttachmentId, event: LadderEvent) {
        if id.role == SurfaceRole::Preview {
            self.preview.on_ladder_event(id, event);
            return;
        }
        let outcome = self
            .attachment
            .on_ladder_event(id, event, self.surface.as_mut());
        if let LadderOutcome::Fault { action, error } = outcome {
            if action.is_terminal() {
                self.transport.lock_playback();
                self.overlay.on_fatal(error.to_string());
            }
        }
    }

    fn execute(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::Play => {
                self.attachment.safe_play(self.surface.as_mut());
            }
            Effect::Pause => {
                self.attachment.request_pause(self.surface.as_mut());
            }
            Effect::Seek(secs) => {
                if self.attachment.is_operational() {
                    self.surface.seek(secs);
                }
            }
            Effect::SetVolume(volume) => self.surface.set_volume(volume),
            Effect::SetMuted(muted) => self.surface.set_muted(muted),
            Effect::Fullscreen(request) => match request {
                FullscreenRequest::EnterWindow => self.window.enter_fullscreen(),
                FullscreenRequest::ExitWindow => self.window.exit_fullscreen(),
                FullscreenRequest::RequestDocument => self.document.request_fullscreen(),
                FullscreenRequest::ExitDocument => self.document.exit_fullscreen(),
            },
            Effect::SelectLevel(selection) => {
                if self.attachment.select_level(selection) {
                    self.transport.level_applied(selection);
                }
            }
            Effect::StartPreview => {
                self.preview
                    .activate(&self.session.descriptor, &self.settings);
            }
            Effect::StopPreview => self.preview.deactivate(),
            Effect::PreviewSeek(secs) => self.preview.request_seek(now, secs),
        }
    }

    fn navigate(&mut self, navigation: Navigation) {
        let allowed = match navigation {
            Navigation::Close => true,
            Navigation::Next => self.session.has_next,
            Navigation::Prev => self.session.has_prev,
        };
        if !allowed {
            log::debug!("Ignoring {navigation:?}: no such episode");
            return;
        }

        self.teardown();
        log::info!("Session ended ({navigation:?})");
        match navigation {
            Navigation::Close => self.host.on_close(),
            Navigation::Next => self.host.on_next(),
            Navigation::Prev => self.host.on_prev(),
        }
    }

    fn teardown(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        self.preview.deactivate();
        self.attachment.detach(self.surface.as_mut());
        self.release_source_once_settled();
        self.transport.cancel_timers();
        self.host.release_stream_cache();
    }

    /// Clears the primary source after teardown, but not while a detached
    /// play request still owes its pause.
    fn release_source_once_settled(&mut self) {
        if self.source_released {
            return;
        }
        if self.attachment.awaiting_settlement() {
            log::debug!("Keeping primary source until the pending play settles");
            return;
        }
        self.source_released = true;
        self.surface.clear_source();
    }
}

impl Drop for PlaybackEngine {
    fn drop(&mut self) {
        self.teardown();
        if !self.source_released {
            self.source_released = true;
            self.surface.clear_source();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{LadderError, LadderErrorKind};
    use crate::domain::stream::RawLevel;
    use crate::test_utils::fakes::{FakeLadderFactory, FakeSurface, LadderCall, SurfaceCall};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Calls(Mutex<Vec<&'static str>>);

    impl Calls {
        fn push(&self, call: &'static str) {
            self.0.lock().unwrap().push(call);
        }

        fn take(&self) -> Vec<&'static str> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    struct RecordingHost(Arc<Calls>);

    impl WindowShell for RecordingHost {
        fn enter_fullscreen(&mut self) {
            self.0.push("window:enter");
        }
        fn exit_fullscreen(&mut self) {
            self.0.push("window:exit");
        }
    }

    impl DocumentFullscreen for RecordingHost {
        fn request_fullscreen(&mut self) {
            self.0.push("document:request");
        }
        fn exit_fullscreen(&mut self) {
            self.0.push("document:exit");
        }
    }

    impl SessionHost for RecordingHost {
        fn on_close(&mut self) {
            self.0.push("close");
        }
        fn on_next(&mut self) {
            self.0.push("next");
        }
        fn on_prev(&mut self) {
            self.0.push("prev");
        }
        fn release_stream_cache(&mut self) {
            self.0.push("release");
        }
    }

    struct Harness {
        engine: PlaybackEngine,
        surface: FakeSurface,
        factory: FakeLadderFactory,
        calls: Arc<Calls>,
    }

    fn harness(session: SessionInfo) -> Harness {
        let surface = FakeSurface::new();
        let factory = FakeLadderFactory::new();
        let calls = Arc::new(Calls::default());
        let ladder: Arc<dyn LadderEngineFactory> = Arc::new(factory.clone());
        let ports = Ports {
            surface: Box::new(surface.clone()),
            preview_surface: Box::new(FakeSurface::new()),
            ladder,
            window: Box::new(RecordingHost(Arc::clone(&calls))),
            document: Box::new(RecordingHost(Arc::clone(&calls))),
            host: Box::new(RecordingHost(Arc::clone(&calls))),
        };
        Harness {
            engine: PlaybackEngine::new(ports, EngineSettings::default(), session),
            surface,
            factory,
            calls,
        }
    }

    fn hls_session() -> SessionInfo {
        SessionInfo::new(StreamDescriptor::adaptive("https://cdn.test/ep1.m3u8"))
            .with_title("Episode 1")
            .with_neighbours(false, true)
    }

    fn raw(height: u32) -> RawLevel {
        RawLevel {
            height: Some(height),
            bitrate_bps: u64::from(height) * 1000,
            name: None,
        }
    }

    #[test]
    fn quality_options_list_auto_first() {
        let mut h = harness(hls_session());
        let now = Instant::now();
        assert!(h.engine.quality_options().is_empty());

        let id = h.engine.current_attachment().unwrap();
        h.engine.handle(
            EngineEvent::Ladder {
                attachment: id,
                event: LadderEvent::ManifestParsed(vec![raw(480), raw(1080)]),
            },
            now,
        );
        h.engine.handle(
            EngineEvent::Input(Message::SelectLevel(LevelSelection::Fixed(1))),
            now,
        );

        let options = h.engine.quality_options();
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Auto", "1080p", "480p"]);
        assert!(options[1].selected);
        assert!(!options[0].selected);
        assert_eq!(
            h.factory.calls_for(id).last(),
            Some(&LadderCall::SetLevel(LevelSelection::Fixed(1)))
        );
    }

    #[test]
    fn selection_before_manifest_is_ignored() {
        let mut h = harness(hls_session());
        h.engine.handle(
            EngineEvent::Input(Message::SelectLevel(LevelSelection::Fixed(0))),
            Instant::now(),
        );
        assert_eq!(h.engine.state().selected_level, LevelSelection::Auto);
    }

    #[test]
    fn fatal_fault_keeps_overlay_with_last_log() {
        let mut h = harness(hls_session());
        let now = Instant::now();
        let id = h.engine.current_attachment().unwrap();

        h.engine.handle(EngineEvent::Log("segment 12: 502".into()), now);
        h.engine.handle(
            EngineEvent::Ladder {
                attachment: id,
                event: LadderEvent::Error(LadderError::fatal(LadderErrorKind::Other, "boom")),
            },
            now,
        );

        assert!(h.engine.is_failed());
        assert!(h.engine.overlay().is_visible());
        assert_eq!(h.engine.overlay().last_log(), Some("segment 12: 502"));
    }

    #[test]
    fn window_fullscreen_drives_both_authorities() {
        let mut h = harness(hls_session());
        let now = Instant::now();
        h.engine
            .handle(EngineEvent::Input(Message::ToggleWindowFullscreen), now);
        assert_eq!(h.calls.take(), ["window:enter", "document:request"]);

        h.engine.handle(EngineEvent::DocumentFullscreenChanged(true), now);
        h.engine
            .handle(EngineEvent::Input(Message::ToggleWindowFullscreen), now);
        assert_eq!(h.calls.take(), ["window:exit", "document:exit"]);
    }

    #[test]
    fn next_without_neighbour_is_ignored() {
        let mut h = harness(hls_session());
        h.engine
            .handle(EngineEvent::Navigate(Navigation::Prev), Instant::now());
        assert!(!h.engine.is_ended());
        assert!(h.calls.take().is_empty());
    }

    #[test]
    fn close_tears_down_before_callback() {
        let mut h = harness(hls_session());
        let id = h.engine.current_attachment().unwrap();
        h.engine
            .handle(EngineEvent::Navigate(Navigation::Next), Instant::now());

        assert!(h.engine.is_ended());
        assert_eq!(h.calls.take(), ["release", "next"]);
        assert_eq!(h.factory.calls_for(id).last(), Some(&LadderCall::Destroy));
        assert!(h.surface.calls().contains(&SurfaceCall::ClearSource));
        assert_eq!(h.engine.next_deadline(), None);

        // Dropping an ended engine does not tear down twice
        drop(h.engine);
        assert!(h.calls.take().is_empty());
    }

    fn progressive_session() -> SessionInfo {
        SessionInfo::new(StreamDescriptor::progressive("https://cdn.test/ep1.mp4"))
    }

    #[test]
    fn close_keeps_source_until_pending_play_settles() {
        let mut h = harness(progressive_session());
        let now = Instant::now();
        let request = h.surface.plays()[0];

        h.engine.handle(EngineEvent::Navigate(Navigation::Close), now);
        assert!(h.engine.is_ended());
        assert!(h.engine.awaiting_settlement());
        assert_eq!(h.calls.take(), ["release", "close"]);
        assert_eq!(h.surface.count(&SurfaceCall::ClearSource), 0);

        h.engine.handle(
            EngineEvent::Media(MediaEvent::PlaySettled {
                request,
                result: Ok(()),
            }),
            now,
        );
        assert!(!h.engine.awaiting_settlement());
        assert_eq!(
            h.surface.calls()[h.surface.calls().len() - 2..],
            [SurfaceCall::Pause, SurfaceCall::ClearSource]
        );

        drop(h.engine);
        assert_eq!(h.surface.count(&SurfaceCall::ClearSource), 1);
    }

    #[test]
    fn dropping_with_unsettled_play_still_clears_source() {
        let mut h = harness(progressive_session());
        h.engine
            .handle(EngineEvent::Navigate(Navigation::Close), Instant::now());
        assert_eq!(h.surface.count(&SurfaceCall::ClearSource), 0);

        drop(h.engine);
        assert_eq!(h.surface.count(&SurfaceCall::ClearSource), 1);
    }

    #[test]
    fn drop_releases_resources() {
        let h = harness(hls_session());
        let id = h.engine.current_attachment().unwrap();
        drop(h.engine);
        assert_eq!(h.calls.take(), ["release"]);
        assert_eq!(h.factory.calls_for(id).last(), Some(&LadderCall::Destroy));
    }

    #[test]
    fn downloaded_sessions_report_full_buffer() {
        let session = SessionInfo::new(StreamDescriptor::local("/media/ep1.mp4"));
        let mut h = harness(session);
        let now = Instant::now();
        h.engine
            .handle(EngineEvent::Media(MediaEvent::DurationChanged(600.0)), now);
        h.engine.handle(
            EngineEvent::Media(MediaEvent::Progress(vec![TimeRange::new(0.0, 10.0)])),
            now,
        );
        assert_eq!(h.engine.buffered_segments(), vec![BufferedSegment::FULL]);
        assert_eq!(h.engine.download_indicator(), Some(DOWNLOAD_INDICATOR));
    }

    #[test]
    fn loading_new_episode_reattaches() {
        let mut h = harness(hls_session());
        let first = h.engine.current_attachment().unwrap();

        h.engine.load(hls_session().with_title("Episode 1 (again)"));
        assert_eq!(h.engine.current_attachment(), Some(first));
        assert_eq!(h.engine.episode_title(), "Episode 1 (again)");

        h.engine.load(SessionInfo::new(StreamDescriptor::adaptive(
            "https://cdn.test/ep2.m3u8",
        )));
        let second = h.engine.current_attachment().unwrap();
        assert_ne!(first, second);
        assert_eq!(h.factory.calls_for(first).last(), Some(&LadderCall::Destroy));
        assert!(h.engine.overlay().is_visible());
    }
}
