// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Only configuration I/O and talking to a stopped engine task can fail with
//! an `Err`. Stream and play faults are domain values
//! ([`crate::domain::error`]) handled inside the engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Playback engine is no longer running")]
    EngineStopped,
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
