// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns. They travel as event
//! payloads; the engine handles them where they occur.

mod stream;

pub use stream::{LadderError, LadderErrorKind, PlayError};
