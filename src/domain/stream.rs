// SPDX-License-Identifier: MPL-2.0
//! Stream value types.
//!
//! These types describe what is being played (a [`StreamDescriptor`]), the
//! quality rungs an adaptive stream offers ([`QualityLevel`]) and the
//! buffered-range data reported by the media surface.

use std::collections::BTreeMap;

// =============================================================================
// StreamDescriptor
// =============================================================================

/// A ready-made playable stream supplied by the navigation layer.
///
/// Immutable for the lifetime of one playback session. Headers are opaque to
/// the engine and only forwarded to whatever fetches segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// Segmented stream described by a manifest.
    pub is_adaptive: bool,
    /// Local or downloaded file, seekable end to end.
    pub is_local: bool,
}

impl StreamDescriptor {
    /// Creates a descriptor for a segmented remote stream.
    #[must_use]
    pub fn adaptive(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            is_adaptive: true,
            is_local: false,
        }
    }

    /// Creates a descriptor for a progressive (single file) stream.
    #[must_use]
    pub fn progressive(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            is_adaptive: false,
            is_local: false,
        }
    }

    /// Creates a descriptor for a file already on disk.
    #[must_use]
    pub fn local(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            is_adaptive: false,
            is_local: true,
        }
    }

    /// Adds a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

// =============================================================================
// Quality levels
// =============================================================================

/// A level as reported by the decoding-ladder engine, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawLevel {
    pub height: Option<u32>,
    pub bitrate_bps: u64,
    pub name: Option<String>,
}

/// One selectable quality rung of an adaptive stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityLevel {
    /// Position of the rung in the manifest; this is what the ladder engine
    /// understands, not the position in the sorted list.
    pub index: usize,
    pub vertical_resolution: Option<u32>,
    pub bitrate_bps: u64,
    pub label: Option<String>,
}

impl QualityLevel {
    /// Builds the published, sorted level set from manifest order.
    ///
    /// Sorted by resolution descending, then bitrate descending.
    #[must_use]
    pub fn from_manifest(raw: &[RawLevel]) -> Vec<Self> {
        let mut levels: Vec<Self> = raw
            .iter()
            .enumerate()
            .map(|(index, level)| Self {
                index,
                vertical_resolution: level.height,
                bitrate_bps: level.bitrate_bps,
                label: level.name.clone(),
            })
            .collect();

        levels.sort_by(|a, b| {
            b.vertical_resolution
                .unwrap_or(0)
                .cmp(&a.vertical_resolution.unwrap_or(0))
                .then(b.bitrate_bps.cmp(&a.bitrate_bps))
        });
        levels
    }

    /// Human readable name for the quality menu.
    #[must_use]
    pub fn display_label(&self) -> String {
        let label = match (self.vertical_resolution, &self.label) {
            (Some(height), _) => format!("{height}p"),
            (None, Some(name)) if !name.is_empty() => name.clone(),
            _ if self.bitrate_bps > 0 => {
                format!("{}k", (self.bitrate_bps as f64 / 1000.0).round() as u64)
            }
            _ => "Unknown".to_string(),
        };

        if label == "0p" {
            "Source".to_string()
        } else {
            label
        }
    }
}

/// Requested quality: a specific rung or automatic adaptation.
///
/// The wire value `-1` used by ladder engines maps to [`LevelSelection::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelSelection {
    #[default]
    Auto,
    Fixed(usize),
}

impl LevelSelection {
    /// Returns the conventional integer form (`-1` for automatic).
    #[must_use]
    pub fn as_index(self) -> i64 {
        match self {
            Self::Auto => -1,
            Self::Fixed(index) => index as i64,
        }
    }

    /// Parses the conventional integer form; any negative value means automatic.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index).map_or(Self::Auto, Self::Fixed)
    }
}

// =============================================================================
// Buffered ranges
// =============================================================================

/// A contiguous buffered range `[start, end)` in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start_secs: f64,
    pub end_secs: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(start_secs: f64, end_secs: f64) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }
}

/// A renderable buffered segment, both values as fractions of the duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferedSegment {
    pub start_fraction: f64,
    pub width_fraction: f64,
}

impl BufferedSegment {
    /// The whole timeline.
    pub const FULL: Self = Self {
        start_fraction: 0.0,
        width_fraction: 1.0,
    };

    /// End of the segment as a fraction.
    #[must_use]
    pub fn end_fraction(&self) -> f64 {
        self.start_fraction + self.width_fraction
    }
}
