// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Piste platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Constants module
//!
//! Application constants grouped into logical domains rather than a single
//! large file. Documented ranges mirror what the input forms enforce; the
//! calculation engine itself never range-checks.

/// Gearing constants: conversion factors, defaults, and documented ranges
pub mod gearing {
    /// Default wheel diameter in millimeters (700c with a 23mm track tire)
    pub const DEFAULT_WHEEL_DIAMETER_MM: f64 = 668.0;
    /// Millimeters per inch, for gear-inch conversion
    pub const MM_PER_INCH: f64 = 25.4;

    /// Smallest chainring accepted by input forms
    pub const MIN_CHAINRING_TEETH: u32 = 30;
    /// Largest chainring accepted by input forms
    pub const MAX_CHAINRING_TEETH: u32 = 70;
    /// Smallest sprocket accepted by input forms
    pub const MIN_SPROCKET_TEETH: u32 = 10;
    /// Largest sprocket accepted by input forms
    pub const MAX_SPROCKET_TEETH: u32 = 25;
    /// Smallest wheel diameter accepted by input forms, millimeters
    pub const MIN_WHEEL_DIAMETER_MM: f64 = 600.0;
    /// Largest wheel diameter accepted by input forms, millimeters
    pub const MAX_WHEEL_DIAMETER_MM: f64 = 750.0;
}

/// Track constants: lap lengths and their documented range
pub mod track {
    /// Default track length in meters (standard 250m velodrome)
    pub const DEFAULT_TRACK_LENGTH_M: u32 = 250;
    /// Shortest track accepted by input forms, meters
    pub const MIN_TRACK_LENGTH_M: u32 = 200;
    /// Longest track accepted by input forms, meters
    pub const MAX_TRACK_LENGTH_M: u32 = 500;
}

/// Application limits
pub mod limits {
    /// Maximum lap times accepted for a single session entry
    pub const MAX_LAPS_PER_SESSION: usize = 200;
    /// Maximum toasts retained in the notification queue
    pub const MAX_TOASTS: usize = 8;
    /// Toast auto-dismiss duration in milliseconds
    pub const TOAST_DISMISS_MS: u64 = 5_000;
}

/// Service names for structured logging
pub mod service_names {
    /// Main application service name
    pub const PISTE: &str = "piste";
    /// CLI binary service name
    pub const PISTE_CLI: &str = "piste-cli";
}
