// SPDX-License-Identifier: MPL-2.0
//! Buffered-range tracking for the scrubber.
//!
//! Converts the time ranges a media surface reports into fractions of the
//! duration that the progress bar can draw directly.

use crate::domain::stream::{BufferedSegment, TimeRange};

/// Derives renderable segments from reported buffered ranges.
///
/// - Local files are seekable end to end: always `[{0, 1}]`.
/// - Unknown, zero or infinite duration, or no ranges: empty.
/// - Otherwise one segment per range in ascending start order. Ranges are
///   clamped to `[0, duration]` and overlapping or touching ranges are
///   merged, so segments never overlap.
///
/// # Example
///
/// ```
/// use stream_lens::domain::stream::TimeRange;
/// use stream_lens::video_player::buffered_segments;
///
/// let segments = buffered_segments(&[TimeRange::new(0.0, 30.0)], 120.0, false);
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].width_fraction, 0.25);
/// ```
#[must_use]
pub fn buffered_segments(
    ranges: &[TimeRange],
    duration_secs: f64,
    is_local: bool,
) -> Vec<BufferedSegment> {
    if is_local {
        return vec![BufferedSegment::FULL];
    }
    if !duration_secs.is_finite() || duration_secs <= 0.0 || ranges.is_empty() {
        return Vec::new();
    }

    let mut clamped: Vec<(f64, f64)> = ranges
        .iter()
        .filter(|r| r.start_secs.is_finite() && r.end_secs.is_finite())
        .map(|r| {
            (
                r.start_secs.clamp(0.0, duration_secs),
                r.end_secs.clamp(0.0, duration_secs),
            )
        })
        .filter(|(start, end)| end > start)
        .collect();
    clamped.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut merged: Vec<(f64, f64)> = Vec::with_capacity(clamped.len());
    for (start, end) in clamped {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    merged
        .into_iter()
        .map(|(start, end)| BufferedSegment {
            start_fraction: start / duration_secs,
            width_fraction: (end - start) / duration_secs,
        })
        .collect()
}
