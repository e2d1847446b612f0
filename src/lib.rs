// SPDX-License-Identifier: MPL-2.0
//! `stream_lens` is a headless adaptive playback engine for desktop media
//! browsers.
//!
//! It attaches segmented or progressive streams to a video surface, recovers
//! from transient stream faults, renders a scrub preview through its own
//! decoding pipeline and reconciles window and document fullscreen. Media
//! backends, windows and navigation plug in through the traits in
//! [`application::port`].

#![doc(html_root_url = "https://docs.rs/stream_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod video_player;

// Lets the shared test fakes name this crate the same way from unit and
// integration tests.
#[cfg(test)]
extern crate self as stream_lens;

#[cfg(test)]
pub(crate) mod test_utils;
