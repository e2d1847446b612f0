// SPDX-License-Identifier: MPL-2.0
//! Port implementations that record every call.
//!
//! Compiled into the unit tests through `crate::test_utils` and into the
//! integration tests by path, so both suites drive the engine through the
//! same fakes.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use stream_lens::application::port::{
    AttachmentId, LadderConfig, LadderEngine, LadderEngineFactory, MediaSurface,
    PlayRequestId, SurfaceRole,
};
use stream_lens::domain::stream::LevelSelection;
use stream_lens::domain::video::Volume;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetSource(String),
    ClearSource,
    Load,
    Play(PlayRequestId),
    Pause,
    Seek(f64),
    SetVolume(f32),
    SetMuted(bool),
    SetOpacity(f32),
}

#[derive(Debug)]
pub struct SurfaceRecord {
    pub calls: Vec<SurfaceCall>,
    pub paused: bool,
}

/// A surface that starts paused and flips its paused flag like a video element.
#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub record: Arc<Mutex<SurfaceRecord>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            record: Arc::new(Mutex::new(SurfaceRecord {
                calls: Vec::new(),
                paused: true,
            })),
        }
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.record.lock().unwrap().calls.clone()
    }

    pub fn plays(&self) -> Vec<PlayRequestId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SurfaceCall::Play(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn seeks(&self) -> Vec<f64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SurfaceCall::Seek(secs) => Some(secs),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &SurfaceCall) -> usize {
        self.calls().iter().filter(|call| *call == wanted).count()
    }

    pub fn pauses(&self) -> usize {
        self.count(&SurfaceCall::Pause)
    }

    /// Forgets the calls recorded so far; the paused flag is kept.
    pub fn clear(&self) {
        self.record.lock().unwrap().calls.clear();
    }

    fn push(&self, call: SurfaceCall) {
        self.record.lock().unwrap().calls.push(call);
    }
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaSurface for FakeSurface {
    fn set_source(&mut self, url: &str) {
        self.push(SurfaceCall::SetSource(url.to_string()));
    }

    fn clear_source(&mut self) {
        self.push(SurfaceCall::ClearSource);
    }

    fn load(&mut self) {
        self.push(SurfaceCall::Load);
    }

    fn play(&mut self, request: PlayRequestId) {
        let mut record = self.record.lock().unwrap();
        record.paused = false;
        record.calls.push(SurfaceCall::Play(request));
    }

    fn pause(&mut self) {
        let mut record = self.record.lock().unwrap();
        record.paused = true;
        record.calls.push(SurfaceCall::Pause);
    }

    fn is_paused(&self) -> bool {
        self.record.lock().unwrap().paused
    }

    fn seek(&mut self, position_secs: f64) {
        self.push(SurfaceCall::Seek(position_secs));
    }

    fn set_volume(&mut self, volume: Volume) {
        self.push(SurfaceCall::SetVolume(volume.value()));
    }

    fn set_muted(&mut self, muted: bool) {
        self.push(SurfaceCall::SetMuted(muted));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.push(SurfaceCall::SetOpacity(opacity));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LadderCall {
    LoadSource(String),
    AttachMedia(SurfaceRole),
    SetLevel(LevelSelection),
    StartLoad,
    RecoverMediaError,
    Destroy,
}

type LadderLog = Arc<Mutex<Vec<(AttachmentId, LadderCall)>>>;

struct FakeLadder {
    id: AttachmentId,
    log: LadderLog,
}

impl FakeLadder {
    fn push(&self, call: LadderCall) {
        self.log.lock().unwrap().push((self.id, call));
    }
}

impl LadderEngine for FakeLadder {
    fn load_source(&mut self, url: &str) {
        self.push(LadderCall::LoadSource(url.to_string()));
    }

    fn attach_media(&mut self, surface: SurfaceRole) {
        self.push(LadderCall::AttachMedia(surface));
    }

    fn set_level(&mut self, level: LevelSelection) {
        self.push(LadderCall::SetLevel(level));
    }

    fn start_load(&mut self) {
        self.push(LadderCall::StartLoad);
    }

    fn recover_media_error(&mut self) {
        self.push(LadderCall::RecoverMediaError);
    }

    fn destroy(&mut self) {
        self.push(LadderCall::Destroy);
    }
}

/// Creates recording ladder engines sharing one call log.
#[derive(Clone)]
pub struct FakeLadderFactory {
    pub supported: bool,
    pub created: Arc<Mutex<Vec<(AttachmentId, LadderConfig)>>>,
    pub log: LadderLog,
}

impl FakeLadderFactory {
    pub fn new() -> Self {
        Self {
            supported: true,
            created: Arc::default(),
            log: Arc::default(),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn calls_for(&self, id: AttachmentId) -> Vec<LadderCall> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| *owner == id)
            .map(|(_, call)| call.clone())
            .collect()
    }

    pub fn created(&self) -> Vec<(AttachmentId, LadderConfig)> {
        self.created.lock().unwrap().clone()
    }

    pub fn created_ids(&self) -> Vec<AttachmentId> {
        self.created.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }
}

impl Default for FakeLadderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LadderEngineFactory for FakeLadderFactory {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn create(&self, id: AttachmentId, config: LadderConfig) -> Box<dyn LadderEngine> {
        self.created.lock().unwrap().push((id, config));
        Box::new(FakeLadder {
            id,
            log: Arc::clone(&self.log),
        })
    }
}
