// SPDX-License-Identifier: MPL-2.0
//! Time display helpers for the transport bar and scrub tooltip.

/// Formats seconds as `mm:ss`.
///
/// Minutes are not wrapped into hours, so a 90 minute film ends at `90:00`.
/// Non-finite or negative input renders as `00:00`.
///
/// # Examples
///
/// ```
/// use stream_lens::video_player::time_units::format_time;
///
/// assert_eq!(format_time(1080.0), "18:00");
/// assert_eq!(format_time(65.9), "01:05");
/// assert_eq!(format_time(f64::NAN), "00:00");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "00:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Converts a fraction of the timeline to seconds.
#[inline]
#[must_use]
pub fn fraction_to_secs(fraction: f64, duration_secs: f64) -> f64 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0) * duration_secs
}

/// Converts seconds to a fraction of the timeline (0 when duration is unknown).
#[inline]
#[must_use]
pub fn secs_to_fraction(secs: f64, duration_secs: f64) -> f64 {
    if !duration_secs.is_finite() || duration_secs <= 0.0 || !secs.is_finite() {
        return 0.0;
    }
    (secs / duration_secs).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn format_pads_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(9.99), "00:09");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(5_400.0), "90:00");
    }

    #[test]
    fn format_rejects_non_finite() {
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-3.0), "00:00");
    }

    #[test]
    fn fraction_conversions_clamp() {
        assert_abs_diff_eq!(fraction_to_secs(0.9, 1200.0), 1080.0);
        assert_abs_diff_eq!(fraction_to_secs(1.5, 100.0), 100.0);
        assert_abs_diff_eq!(fraction_to_secs(0.5, f64::NAN), 0.0);
        assert_abs_diff_eq!(secs_to_fraction(30.0, 120.0), 0.25);
        assert_abs_diff_eq!(secs_to_fraction(30.0, 0.0), 0.0);
    }
}
