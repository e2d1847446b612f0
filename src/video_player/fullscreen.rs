// SPDX-License-Identifier: MPL-2.0
//! Reconciliation of the two fullscreen authorities.
//!
//! The OS window and the document (player container) can each be fullscreen
//! independently. The state is the 4-combination table window × document;
//! every input maps a cell to a new cell plus the requests that keep the two
//! authorities consistent.
//!
//! | window | document | `ToggleWindow`                    | `ToggleDocument`  |
//! |--------|----------|-----------------------------------|-------------------|
//! | off    | off      | enter window, request document    | request document  |
//! | off    | on       | enter window                      | exit document     |
//! | on     | off      | exit window                       | request document  |
//! | on     | on       | exit window, exit document        | exit document     |
//!
//! The document flag only follows `DocumentChanged` notifications since
//! document requests are asynchronous and may be refused. External changes
//! never force the window out of fullscreen.

/// Current cell of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullscreenState {
    pub window: bool,
    pub document: bool,
}

/// Inputs to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenInput {
    /// The window fullscreen control was used.
    ToggleWindow,
    /// The player (document-only) fullscreen control was used.
    ToggleDocument,
    /// The escape key was pressed outside a text input.
    Escape,
    /// The window shell reports the window entered or left fullscreen.
    WindowChanged(bool),
    /// The document reports its fullscreen element changed.
    DocumentChanged(bool),
}

/// Requests to send to the authorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    EnterWindow,
    ExitWindow,
    RequestDocument,
    ExitDocument,
}

impl FullscreenState {
    /// True when either authority is fullscreen.
    #[must_use]
    pub fn any(self) -> bool {
        self.window || self.document
    }

    /// Applies one input, returning the new cell and the requests to issue.
    #[must_use]
    pub fn transition(self, input: FullscreenInput) -> (Self, Vec<FullscreenRequest>) {
        use FullscreenInput as In;
        use FullscreenRequest as Req;

        let Self { window, document } = self;
        match (window, document, input) {
            (false, false, In::ToggleWindow) => (
                Self::new(true, false),
                vec![Req::EnterWindow, Req::RequestDocument],
            ),
            (false, true, In::ToggleWindow) => (Self::new(true, true), vec![Req::EnterWindow]),
            (true, false, In::ToggleWindow) => (Self::new(false, false), vec![Req::ExitWindow]),
            (true, true, In::ToggleWindow) => (
                Self::new(false, true),
                vec![Req::ExitWindow, Req::ExitDocument],
            ),

            (_, false, In::ToggleDocument) => (self, vec![Req::RequestDocument]),
            (_, true, In::ToggleDocument) => (self, vec![Req::ExitDocument]),

            (true, false, In::Escape) => (Self::new(false, false), vec![Req::ExitWindow]),
            (true, true, In::Escape) => (
                Self::new(false, true),
                vec![Req::ExitWindow, Req::ExitDocument],
            ),
            (false, _, In::Escape) => (self, Vec::new()),

            (_, _, In::WindowChanged(now)) => (Self::new(now, document), Vec::new()),
            (_, _, In::DocumentChanged(now)) => (Self::new(window, now), Vec::new()),
        }
    }

    const fn new(window: bool, document: bool) -> Self {
        Self { window, document }
    }
}
