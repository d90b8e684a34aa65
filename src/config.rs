// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and rider defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Environment-based configuration
//!
//! Rider defaults (wheel diameter, track length) are explicit configuration
//! parameters with documented fallbacks, not hidden defaulting chains: a
//! missing or invalid environment value logs a warning and falls back to
//! the documented default.

use piste_core::constants::{gearing, track};
use piste_core::validation;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational logging
    #[default]
    Info,
    /// Verbose debugging output
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test harness
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Rider-facing calculation defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiderDefaults {
    /// Wheel diameter in millimeters used when no profile preference exists
    pub wheel_diameter_mm: f64,
    /// Track length in meters used when no profile preference exists
    pub track_length_m: u32,
}

impl Default for RiderDefaults {
    fn default() -> Self {
        Self {
            wheel_diameter_mm: gearing::DEFAULT_WHEEL_DIAMETER_MM,
            track_length_m: track::DEFAULT_TRACK_LENGTH_M,
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Rider calculation defaults
    pub rider: RiderDefaults,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `PISTE_ENV`, `RUST_LOG` (level only),
    /// `PISTE_WHEEL_DIAMETER_MM`, `PISTE_TRACK_LENGTH_M`. Invalid values
    /// log a warning and fall back to the documented defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("PISTE_ENV")
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let log_level = env::var("RUST_LOG")
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();

        let mut rider = RiderDefaults::default();
        if let Ok(raw) = env::var("PISTE_WHEEL_DIAMETER_MM") {
            match raw.parse::<f64>() {
                Ok(value) if validation::wheel_diameter_mm(value).is_ok() => {
                    rider.wheel_diameter_mm = value;
                }
                _ => warn!(
                    value = %raw,
                    default = rider.wheel_diameter_mm,
                    "invalid PISTE_WHEEL_DIAMETER_MM, using default"
                ),
            }
        }
        if let Ok(raw) = env::var("PISTE_TRACK_LENGTH_M") {
            match raw.parse::<u32>() {
                Ok(value) if validation::track_length_m(value).is_ok() => {
                    rider.track_length_m = value;
                }
                _ => warn!(
                    value = %raw,
                    default = rider.track_length_m,
                    "invalid PISTE_TRACK_LENGTH_M, using default"
                ),
            }
        }

        Self {
            environment,
            log_level,
            rider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default(""),
            Environment::Development
        );
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_rider_defaults_match_documented_values() {
        let defaults = RiderDefaults::default();
        assert!((defaults.wheel_diameter_mm - 668.0).abs() < f64::EPSILON);
        assert_eq!(defaults.track_length_m, 250);
    }
}
