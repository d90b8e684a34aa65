// ABOUTME: Per-session lap-time reductions for display
// ABOUTME: Bundles lap count, best, average, and total into one snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

use crate::laptime::{average_time, best_time, format_time};
use serde::{Deserialize, Serialize};

/// Reduction of one session's lap times for display
///
/// The numeric fields keep full precision; the `formatted_*` accessors
/// round to integer milliseconds before re-feeding [`format_time`], which
/// is the caller-side rounding contract of [`average_time`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    /// Number of laps recorded
    pub lap_count: usize,
    /// Fastest lap in milliseconds, when any lap exists
    pub best_ms: Option<u64>,
    /// Mean lap time in milliseconds, when any lap exists
    pub average_ms: Option<f64>,
    /// Sum of all laps in milliseconds
    pub total_ms: u64,
}

impl SessionSummary {
    /// Reduce a sequence of lap times (milliseconds) to a summary
    #[must_use]
    pub fn from_laps(times_ms: &[u64]) -> Self {
        Self {
            lap_count: times_ms.len(),
            best_ms: best_time(times_ms),
            average_ms: average_time(times_ms),
            total_ms: times_ms.iter().sum(),
        }
    }

    /// Fastest lap formatted for display
    #[must_use]
    pub fn formatted_best(&self) -> Option<String> {
        self.best_ms.map(format_time)
    }

    /// Mean lap formatted for display
    #[must_use]
    pub fn formatted_average(&self) -> Option<String> {
        self.average_ms.map(|avg| format_time(avg.round() as u64))
    }

    /// Session total formatted for display
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format_time(self.total_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_session() {
        let summary = SessionSummary::from_laps(&[]);
        assert_eq!(summary.lap_count, 0);
        assert_eq!(summary.best_ms, None);
        assert_eq!(summary.average_ms, None);
        assert_eq!(summary.total_ms, 0);
        assert_eq!(summary.formatted_best(), None);
        assert_eq!(summary.formatted_total(), "0.000");
    }

    #[test]
    fn test_summary_reduces_laps() {
        let summary = SessionSummary::from_laps(&[12_000, 10_000, 11_000]);
        assert_eq!(summary.lap_count, 3);
        assert_eq!(summary.best_ms, Some(10_000));
        assert!((summary.average_ms.unwrap() - 11_000.0).abs() < 1e-9);
        assert_eq!(summary.total_ms, 33_000);
    }

    #[test]
    fn test_formatted_average_rounds_to_millisecond() {
        // 10000, 10001 -> mean 10000.5 -> rounds to 10001 -> "10.001"
        let summary = SessionSummary::from_laps(&[10_000, 10_001]);
        assert_eq!(summary.formatted_average().as_deref(), Some("10.001"));
        assert_eq!(summary.formatted_best().as_deref(), Some("10.000"));
    }

    #[test]
    fn test_formatted_total_carries_minutes() {
        let summary = SessionSummary::from_laps(&[30_000, 32_345]);
        assert_eq!(summary.formatted_total(), "1:02.345");
    }
}
