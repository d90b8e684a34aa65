// ABOUTME: Lap-time string formatting, parsing, and aggregate reductions
// ABOUTME: Converts between millisecond lap times and human-entered time strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Lap-time formatting and parsing
//!
//! Milliseconds are the canonical internal unit for every lap time. The
//! external representation has two shapes: `SS.mmm` for sub-minute times
//! and `M:SS.mmm` once a full minute is reached.
//!
//! Parsing is the designed validation boundary for human-entered time
//! strings and is intentionally stricter than the formatter's output
//! domain: it rejects malformed shapes, extra colons, negative values,
//! and out-of-range seconds so forms can surface a specific error.

use piste_core::errors::{AppError, AppResult};

/// Format a lap time in milliseconds for display
///
/// `83456` becomes `"1:23.456"`, `62345` becomes `"1:02.345"` (seconds
/// zero-padded under a minute marker), and `12345` becomes `"12.345"`.
#[must_use]
pub fn format_time(time_ms: u64) -> String {
    let minutes = time_ms / 60_000;
    let seconds = (time_ms % 60_000) as f64 / 1000.0;

    if minutes > 0 {
        // {:06.3} pads to width 6 including the decimal point: 2.345 -> "02.345"
        format!("{minutes}:{seconds:06.3}")
    } else {
        format!("{seconds:.3}")
    }
}

/// Parse a human-entered lap-time string to milliseconds
///
/// Accepts `SS.mmm` or `M:SS.mmm` (surrounding whitespace ignored).
/// Returns `None` for anything else: extra colons, non-numeric parts,
/// negative values, non-finite values, or a seconds part of 60 or more
/// in the minute form. Fractional milliseconds round to the nearest
/// integer millisecond.
#[must_use]
pub fn parse_time(text: &str) -> Option<u64> {
    let trimmed = text.trim();

    if trimmed.contains(':') {
        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 2 {
            return None;
        }

        let minutes: i64 = parts[0].parse().ok()?;
        let seconds: f64 = parts[1].parse().ok()?;

        if minutes < 0 || !seconds.is_finite() || seconds < 0.0 || seconds >= 60.0 {
            return None;
        }

        let total_ms = (minutes as f64).mul_add(60_000.0, seconds * 1000.0);
        return Some(total_ms.round() as u64);
    }

    let seconds: f64 = trimmed.parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some((seconds * 1000.0).round() as u64)
}

/// Parse a lap-time string, mapping failure to a form-ready error
///
/// # Errors
/// Returns `InvalidFormat` with a message naming the rejected input when
/// the string is not a valid `SS.mmm` or `M:SS.mmm` time.
pub fn parse_time_strict(text: &str) -> AppResult<u64> {
    parse_time(text).ok_or_else(|| {
        AppError::invalid_format(format!(
            "Invalid time format: \"{text}\". Use SS.mmm or M:SS.mmm"
        ))
    })
}

/// Best (fastest) lap time, `None` for an empty sequence
#[must_use]
pub fn best_time(times_ms: &[u64]) -> Option<u64> {
    times_ms.iter().copied().min()
}

/// Arithmetic mean lap time, `None` for an empty sequence
///
/// No rounding is applied; callers round before re-feeding the result
/// through [`format_time`].
#[must_use]
pub fn average_time(times_ms: &[u64]) -> Option<f64> {
    if times_ms.is_empty() {
        return None;
    }
    let sum: f64 = times_ms.iter().map(|&t| t as f64).sum();
    Some(sum / times_ms.len() as f64)
}
