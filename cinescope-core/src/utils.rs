//! Utility functions for formatting and parsing.
//!
//! This module provides general-purpose helpers used throughout the
//! cinescope-core library: frame rate parsing for ffprobe output and duration
//! formatting for log lines.

/// Parses an ffprobe frame rate such as "30000/1001" or "25".
///
/// Returns `None` for malformed input, a zero denominator, or a rate that is
/// not strictly positive.
#[must_use]
pub fn parse_frame_rate(rate: &str) -> Option<f64> {
    let rate = rate.trim();
    let value = match rate.split_once('/') {
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().ok()?;
            let den = den.trim().parse::<f64>().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => rate.parse::<f64>().ok()?,
    };

    (value.is_finite() && value > 0.0).then_some(value)
}

/// Formats seconds as HH:MM:SS (e.g., 3725 -> "01:02:05").
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
