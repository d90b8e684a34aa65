// ABOUTME: Gear arithmetic for fixed-gear track setups
// ABOUTME: Ratio, gear inches, development, and speed/cadence conversion formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Gear arithmetic
//!
//! Free functions implementing the five drivetrain formulas, plus a
//! [`GearCalculator`] that carries a configured wheel diameter so callers
//! don't thread the rider's preference through every call site.
//!
//! Division by sprocket teeth is unguarded: a zero sprocket is a caller
//! contract violation and yields `inf`. The input forms enforce the
//! documented teeth ranges before any value reaches this module.

use piste_core::constants::gearing::{DEFAULT_WHEEL_DIAMETER_MM, MM_PER_INCH};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Gear ratio: chainring teeth over sprocket teeth
#[must_use]
pub fn ratio(chainring_teeth: u32, sprocket_teeth: u32) -> f64 {
    f64::from(chainring_teeth) / f64::from(sprocket_teeth)
}

/// Gear inches: ratio times wheel diameter in inches
#[must_use]
pub fn gear_inches(chainring_teeth: u32, sprocket_teeth: u32, wheel_diameter_mm: f64) -> f64 {
    ratio(chainring_teeth, sprocket_teeth) * (wheel_diameter_mm / MM_PER_INCH)
}

/// Development: meters traveled per full crank revolution
///
/// Wheel circumference in meters times the gear ratio.
#[must_use]
pub fn development(chainring_teeth: u32, sprocket_teeth: u32, wheel_diameter_mm: f64) -> f64 {
    let circumference_m = PI * wheel_diameter_mm / 1000.0;
    circumference_m * ratio(chainring_teeth, sprocket_teeth)
}

/// Speed in km/h at the given cadence
///
/// Returns exactly 0 at zero cadence.
#[must_use]
pub fn speed_from_cadence(
    chainring_teeth: u32,
    sprocket_teeth: u32,
    cadence_rpm: f64,
    wheel_diameter_mm: f64,
) -> f64 {
    let meters_per_minute =
        development(chainring_teeth, sprocket_teeth, wheel_diameter_mm) * cadence_rpm;
    meters_per_minute * 60.0 / 1000.0
}

/// Cadence in RPM required to hold the given speed
///
/// Inverse of [`speed_from_cadence`]; returns exactly 0 at zero speed.
#[must_use]
pub fn cadence_from_speed(
    chainring_teeth: u32,
    sprocket_teeth: u32,
    speed_kmh: f64,
    wheel_diameter_mm: f64,
) -> f64 {
    let meters_per_minute = speed_kmh * 1000.0 / 60.0;
    meters_per_minute / development(chainring_teeth, sprocket_teeth, wheel_diameter_mm)
}

/// Derived metrics for one chainring/sprocket combination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GearMetrics {
    /// Dimensionless gear ratio
    pub ratio: f64,
    /// Gear inches
    pub gear_inches: f64,
    /// Development in meters per crank revolution
    pub development_m: f64,
}

/// Gear calculator carrying a configured wheel diameter
///
/// The wheel diameter is an explicit configuration parameter with the
/// documented 668mm default, typically taken from the rider's profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearCalculator {
    /// Wheel diameter in millimeters used for every derived metric
    pub wheel_diameter_mm: f64,
}

impl Default for GearCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl GearCalculator {
    /// Calculator with the default 668mm track wheel
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wheel_diameter_mm: DEFAULT_WHEEL_DIAMETER_MM,
        }
    }

    /// Calculator with a custom wheel diameter
    #[must_use]
    pub const fn with_wheel_diameter(wheel_diameter_mm: f64) -> Self {
        Self { wheel_diameter_mm }
    }

    /// Gear ratio (independent of wheel diameter)
    #[must_use]
    pub fn ratio(&self, chainring_teeth: u32, sprocket_teeth: u32) -> f64 {
        ratio(chainring_teeth, sprocket_teeth)
    }

    /// Gear inches for the configured wheel
    #[must_use]
    pub fn gear_inches(&self, chainring_teeth: u32, sprocket_teeth: u32) -> f64 {
        gear_inches(chainring_teeth, sprocket_teeth, self.wheel_diameter_mm)
    }

    /// Development for the configured wheel, meters per revolution
    #[must_use]
    pub fn development(&self, chainring_teeth: u32, sprocket_teeth: u32) -> f64 {
        development(chainring_teeth, sprocket_teeth, self.wheel_diameter_mm)
    }

    /// Speed in km/h at the given cadence
    #[must_use]
    pub fn speed_from_cadence(
        &self,
        chainring_teeth: u32,
        sprocket_teeth: u32,
        cadence_rpm: f64,
    ) -> f64 {
        speed_from_cadence(
            chainring_teeth,
            sprocket_teeth,
            cadence_rpm,
            self.wheel_diameter_mm,
        )
    }

    /// Cadence in RPM required to hold the given speed
    #[must_use]
    pub fn cadence_from_speed(
        &self,
        chainring_teeth: u32,
        sprocket_teeth: u32,
        speed_kmh: f64,
    ) -> f64 {
        cadence_from_speed(
            chainring_teeth,
            sprocket_teeth,
            speed_kmh,
            self.wheel_diameter_mm,
        )
    }

    /// All derived metrics for one combination
    #[must_use]
    pub fn metrics(&self, chainring_teeth: u32, sprocket_teeth: u32) -> GearMetrics {
        GearMetrics {
            ratio: self.ratio(chainring_teeth, sprocket_teeth),
            gear_inches: self.gear_inches(chainring_teeth, sprocket_teeth),
            development_m: self.development(chainring_teeth, sprocket_teeth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_ratio() {
        assert!(close(ratio(50, 14), 3.571, 0.001));
        assert!(close(ratio(49, 15), 3.267, 0.001));
    }

    #[test]
    fn test_ratio_is_one_for_equal_teeth() {
        assert!((ratio(15, 15) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gear_inches_with_default_wheel() {
        let calc = GearCalculator::new();
        assert!(close(calc.gear_inches(50, 14), 93.88, 0.1));
    }

    #[test]
    fn test_gear_inches_with_custom_wheel() {
        assert!(close(gear_inches(50, 14, 700.0), 98.43, 0.1));
    }

    #[test]
    fn test_development() {
        // 50/14 * pi * 0.668
        assert!(close(development(50, 14, 668.0), 7.49, 0.1));
        assert!(close(development(50, 14, 700.0), 7.85, 0.1));
    }

    #[test]
    fn test_speed_at_100_rpm_is_plausible() {
        let speed = speed_from_cadence(50, 14, 100.0, 668.0);
        assert!(speed > 40.0);
        assert!(speed < 50.0);
    }

    #[test]
    fn test_speed_cadence_round_trip() {
        for rpm in [60.0, 95.0, 120.0, 140.0] {
            let speed = speed_from_cadence(50, 14, rpm, 668.0);
            let back = cadence_from_speed(50, 14, speed, 668.0);
            assert!(close(back, rpm, 1e-9));
        }
    }

    #[test]
    fn test_zero_input_identities() {
        assert!((speed_from_cadence(50, 14, 0.0, 668.0) - 0.0).abs() < f64::EPSILON);
        assert!((cadence_from_speed(50, 14, 0.0, 668.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_sprocket_is_unguarded() {
        // Caller contract violation; the math goes to infinity rather than erroring.
        assert!(ratio(50, 0).is_infinite());
    }

    #[test]
    fn test_calculator_metrics_match_free_functions() {
        let calc = GearCalculator::with_wheel_diameter(700.0);
        let metrics = calc.metrics(50, 14);
        assert!((metrics.ratio - ratio(50, 14)).abs() < f64::EPSILON);
        assert!((metrics.gear_inches - gear_inches(50, 14, 700.0)).abs() < f64::EPSILON);
        assert!((metrics.development_m - development(50, 14, 700.0)).abs() < f64::EPSILON);
    }
}
