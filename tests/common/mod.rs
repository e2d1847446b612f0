// SPDX-License-Identifier: MPL-2.0
//! Recording ports and an engine rig shared by the integration tests.

#![allow(dead_code)]

#[path = "../../src/test_utils/fakes.rs"]
mod fakes;

pub use fakes::{FakeLadderFactory, FakeSurface, LadderCall, SurfaceCall};

use std::sync::{Arc, Mutex};
use std::time::Instant;
use stream_lens::application::port::{DocumentFullscreen, SessionHost, WindowShell};
use stream_lens::config::EngineSettings;
use stream_lens::domain::stream::RawLevel;
use stream_lens::video_player::{EngineEvent, MediaEvent, PlaybackEngine, Ports, SessionInfo};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Window, document and navigation callbacks in one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost(Arc<Mutex<Vec<&'static str>>>);

impl RecordingHost {
    pub fn take(&self) -> Vec<&'static str> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    fn push(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }
}

impl WindowShell for RecordingHost {
    fn enter_fullscreen(&mut self) {
        self.push("window:enter");
    }

    fn exit_fullscreen(&mut self) {
        self.push("window:exit");
    }
}

impl DocumentFullscreen for RecordingHost {
    fn request_fullscreen(&mut self) {
        self.push("document:request");
    }

    fn exit_fullscreen(&mut self) {
        self.push("document:exit");
    }
}

impl SessionHost for RecordingHost {
    fn on_close(&mut self) {
        self.push("close");
    }

    fn on_next(&mut self) {
        self.push("next");
    }

    fn on_prev(&mut self) {
        self.push("prev");
    }

    fn release_stream_cache(&mut self) {
        self.push("release");
    }
}

/// An engine wired to recording ports.
pub struct Rig {
    pub engine: PlaybackEngine,
    pub surface: FakeSurface,
    pub preview: FakeSurface,
    pub ladder: FakeLadderFactory,
    pub host: RecordingHost,
    pub now: Instant,
}

impl Rig {
    pub fn new(session: SessionInfo) -> Self {
        init_logging();
        let surface = FakeSurface::default();
        let preview = FakeSurface::default();
        let ladder = FakeLadderFactory::default();
        let host = RecordingHost::default();
        let ports = Ports {
            surface: Box::new(surface.clone()),
            preview_surface: Box::new(preview.clone()),
            ladder: Arc::new(ladder.clone()),
            window: Box::new(host.clone()),
            document: Box::new(host.clone()),
            host: Box::new(host.clone()),
        };
        Self {
            engine: PlaybackEngine::new(ports, EngineSettings::default(), session),
            surface,
            preview,
            ladder,
            host,
            now: Instant::now(),
        }
    }

    pub fn send(&mut self, event: EngineEvent) {
        self.engine.handle(event, self.now);
    }

    pub fn media(&mut self, event: MediaEvent) {
        self.send(EngineEvent::Media(event));
    }

    /// Moves the clock forward and fires whatever became due.
    pub fn advance(&mut self, millis: u64) {
        self.now += std::time::Duration::from_millis(millis);
        self.engine.tick(self.now);
    }
}

pub fn level(height: u32, bitrate_bps: u64) -> RawLevel {
    RawLevel {
        height: Some(height),
        bitrate_bps,
        name: None,
    }
}
