// SPDX-License-Identifier: MPL-2.0
//! This module handles the engine's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use stream_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.playback.idle_timeout_ms = Some(5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Derive the validated settings the engine runs with
//! let settings = config.engine_settings();
//! assert_eq!(settings.idle_timeout.as_millis(), 5_000);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::application::port::LadderConfig;
use crate::domain::stream::StreamDescriptor;
use crate::domain::ui::{IdleTimeout, PreviewDebounce};
use crate::domain::video::{KeyboardSeekStep, Volume};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StreamLens";

/// Persisted preferences. Every field is optional so partial files load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackSection,
    #[serde(default)]
    pub buffer: BufferSection,
}

/// `[playback]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSection {
    pub idle_timeout_ms: Option<u64>,
    pub preview_debounce_ms: Option<u64>,
    pub keyboard_seek_step_secs: Option<f64>,
    pub volume_step: Option<f32>,
    pub volume: Option<f32>,
}

/// `[buffer]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BufferSection {
    pub max_buffer_secs: Option<u64>,
    pub max_max_buffer_secs: Option<u64>,
    pub max_buffer_bytes: Option<u64>,
    pub back_buffer_secs: Option<u64>,
    pub enable_worker: Option<bool>,
}

/// Validated settings the engine runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub idle_timeout: IdleTimeout,
    pub preview_debounce: PreviewDebounce,
    pub seek_step: KeyboardSeekStep,
    pub volume_step: f32,
    pub initial_volume: Volume,
    pub max_buffer_length: Duration,
    pub max_max_buffer_length: Duration,
    pub max_buffer_size_bytes: u64,
    pub back_buffer_length: Duration,
    pub enable_worker: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Config::default().engine_settings()
    }
}

impl Config {
    /// Resolves missing values to defaults and clamps the rest.
    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        let p = &self.playback;
        let b = &self.buffer;
        let max_buffer_secs = b.max_buffer_secs.unwrap_or(DEFAULT_MAX_BUFFER_SECS);
        let max_max_buffer_secs = b
            .max_max_buffer_secs
            .unwrap_or(DEFAULT_MAX_MAX_BUFFER_SECS)
            .max(max_buffer_secs);

        EngineSettings {
            idle_timeout: IdleTimeout::new(p.idle_timeout_ms.unwrap_or(DEFAULT_IDLE_TIMEOUT_MS)),
            preview_debounce: PreviewDebounce::new(
                p.preview_debounce_ms.unwrap_or(DEFAULT_PREVIEW_DEBOUNCE_MS),
            ),
            seek_step: KeyboardSeekStep::new(
                p.keyboard_seek_step_secs
                    .unwrap_or(DEFAULT_KEYBOARD_SEEK_STEP_SECS),
            ),
            volume_step: p
                .volume_step
                .unwrap_or(DEFAULT_VOLUME_STEP)
                .clamp(0.01, 1.0),
            initial_volume: Volume::new(p.volume.unwrap_or(DEFAULT_VOLUME)),
            max_buffer_length: Duration::from_secs(max_buffer_secs),
            max_max_buffer_length: Duration::from_secs(max_max_buffer_secs),
            max_buffer_size_bytes: b.max_buffer_bytes.unwrap_or(DEFAULT_MAX_BUFFER_BYTES),
            back_buffer_length: Duration::from_secs(
                b.back_buffer_secs.unwrap_or(DEFAULT_BACK_BUFFER_SECS),
            ),
            enable_worker: b.enable_worker.unwrap_or(true),
        }
    }
}

impl EngineSettings {
    /// Ladder configuration for the primary surface: large forward buffer,
    /// long back buffer, library-chosen start level.
    #[must_use]
    pub fn primary_ladder_config(&self, descriptor: &StreamDescriptor) -> LadderConfig {
        LadderConfig {
            max_buffer_length: self.max_buffer_length,
            max_max_buffer_length: self.max_max_buffer_length,
            max_buffer_size_bytes: self.max_buffer_size_bytes,
            back_buffer_length: self.back_buffer_length,
            enable_worker: self.enable_worker,
            start_level: None,
            cap_level_to_player_size: false,
            auto_start_load: true,
            headers: descriptor.headers.clone(),
        }
    }

    /// Ladder configuration for the scrub preview: lowest rung first,
    /// capped to the preview surface size, library default buffering.
    #[must_use]
    pub fn preview_ladder_config(&self, descriptor: &StreamDescriptor) -> LadderConfig {
        LadderConfig {
            start_level: Some(0),
            cap_level_to_player_size: true,
            auto_start_load: true,
            headers: descriptor.headers.clone(),
            ..LadderConfig::default()
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid settings file {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
