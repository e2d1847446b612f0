// SPDX-License-Identifier: MPL-2.0
//! Host application ports.
//!
//! The surrounding application owns the window, the document and episode
//! sequencing. The engine only calls into these traits.

/// The OS-level window fullscreen authority.
pub trait WindowShell: Send {
    fn enter_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);
}

/// The in-document fullscreen authority (the player container element).
///
/// Requests are asynchronous; the outcome arrives as a document fullscreen
/// change notification.
pub trait DocumentFullscreen: Send {
    fn request_fullscreen(&mut self);
    fn exit_fullscreen(&mut self);
}

/// Navigation callbacks owned by the application.
pub trait SessionHost: Send {
    /// The user abandoned the session.
    fn on_close(&mut self);

    /// The user asked for the next episode.
    fn on_next(&mut self);

    /// The user asked for the previous episode.
    fn on_prev(&mut self);

    /// Called once per session teardown so the transport layer can drop
    /// whatever it cached for the stream.
    fn release_stream_cache(&mut self) {}
}
