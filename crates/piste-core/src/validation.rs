// ABOUTME: Range validation for user-entered numeric input
// ABOUTME: Enforces the documented gearing and track ranges at the form boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Input range validation
//!
//! The calculation engine is a trusted-input numeric core and performs no
//! validation of its own. These checks are the single place where the
//! documented ranges (chainring 30-70T, sprocket 10-25T, wheel diameter
//! 600-750mm, track length 200-500m) are enforced, before any value
//! reaches the calculator or the storage layer.

use crate::constants::{gearing, track};
use crate::errors::{AppError, AppResult};
use crate::models::GearKind;

/// Validate a teeth count for the given drivetrain position
///
/// # Errors
/// Returns `ValueOutOfRange` when the count is outside the documented range
pub fn teeth(kind: GearKind, teeth: u32) -> AppResult<()> {
    let (min, max) = kind.teeth_range();
    if (min..=max).contains(&teeth) {
        return Ok(());
    }
    Err(AppError::value_out_of_range(format!(
        "{} teeth must be between {min} and {max}, got {teeth}",
        kind.display_name()
    )))
}

/// Validate a chainring teeth count (30-70)
///
/// # Errors
/// Returns `ValueOutOfRange` when the count is outside the documented range
pub fn chainring_teeth(value: u32) -> AppResult<()> {
    teeth(GearKind::Chainring, value)
}

/// Validate a sprocket teeth count (10-25)
///
/// # Errors
/// Returns `ValueOutOfRange` when the count is outside the documented range
pub fn sprocket_teeth(value: u32) -> AppResult<()> {
    teeth(GearKind::Sprocket, value)
}

/// Validate a wheel diameter in millimeters (600-750)
///
/// # Errors
/// Returns `ValueOutOfRange` when the diameter is non-finite or outside the
/// documented range
pub fn wheel_diameter_mm(value: f64) -> AppResult<()> {
    if value.is_finite()
        && (gearing::MIN_WHEEL_DIAMETER_MM..=gearing::MAX_WHEEL_DIAMETER_MM).contains(&value)
    {
        return Ok(());
    }
    Err(AppError::value_out_of_range(format!(
        "wheel diameter must be between {}mm and {}mm, got {value}mm",
        gearing::MIN_WHEEL_DIAMETER_MM,
        gearing::MAX_WHEEL_DIAMETER_MM
    )))
}

/// Validate a track length in meters (200-500)
///
/// # Errors
/// Returns `ValueOutOfRange` when the length is outside the documented range
pub fn track_length_m(value: u32) -> AppResult<()> {
    if (track::MIN_TRACK_LENGTH_M..=track::MAX_TRACK_LENGTH_M).contains(&value) {
        return Ok(());
    }
    Err(AppError::value_out_of_range(format!(
        "track length must be between {}m and {}m, got {value}m",
        track::MIN_TRACK_LENGTH_M,
        track::MAX_TRACK_LENGTH_M
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_teeth_boundaries_inclusive() {
        assert!(chainring_teeth(30).is_ok());
        assert!(chainring_teeth(70).is_ok());
        assert!(chainring_teeth(29).is_err());
        assert!(chainring_teeth(71).is_err());

        assert!(sprocket_teeth(10).is_ok());
        assert!(sprocket_teeth(25).is_ok());
        assert!(sprocket_teeth(9).is_err());
        assert!(sprocket_teeth(26).is_err());
    }

    #[test]
    fn test_wheel_diameter_rejects_non_finite() {
        assert!(wheel_diameter_mm(668.0).is_ok());
        assert!(wheel_diameter_mm(600.0).is_ok());
        assert!(wheel_diameter_mm(750.0).is_ok());
        assert!(wheel_diameter_mm(599.9).is_err());
        assert!(wheel_diameter_mm(f64::NAN).is_err());
        assert!(wheel_diameter_mm(f64::INFINITY).is_err());
    }

    #[test]
    fn test_track_length_range() {
        assert!(track_length_m(250).is_ok());
        assert!(track_length_m(200).is_ok());
        assert!(track_length_m(500).is_ok());
        assert!(track_length_m(199).is_err());
        assert!(track_length_m(501).is_err());
    }

    #[test]
    fn test_error_code_is_value_out_of_range() {
        let err = sprocket_teeth(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(err.message.contains("sprocket"));
    }
}
