// ABOUTME: Gear-ratio and lap-time calculation engine for the Piste platform
// ABOUTME: Pure numeric and string transforms with no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

#![deny(unsafe_code)]

//! # Piste Gearing
//!
//! The calculation engine behind every derived number in the Piste UI:
//! gear ratio, gear inches, development, speed/cadence conversion, and
//! lap-time formatting, parsing, and aggregation.
//!
//! Every function here is pure, synchronous, and referentially
//! transparent, so it is safe to call from any concurrency context
//! without synchronization. Numeric inputs are trusted: range checks
//! belong to `piste_core::validation` at the form boundary, never here.

/// Gear arithmetic: ratio, gear inches, development, speed and cadence
pub mod gear;

/// Lap-time formatting, parsing, and aggregate reductions
pub mod laptime;

/// Per-session lap reductions for display
pub mod summary;

pub use gear::{
    cadence_from_speed, development, gear_inches, ratio, speed_from_cadence, GearCalculator,
    GearMetrics,
};
pub use laptime::{average_time, best_time, format_time, parse_time, parse_time_strict};
pub use summary::SessionSummary;
