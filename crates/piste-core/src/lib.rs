// ABOUTME: Core types and constants for the Piste track cycling platform
// ABOUTME: Foundation crate with error handling, domain models, constants, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

#![deny(unsafe_code)]

//! # Piste Core
//!
//! Foundation crate providing shared types and constants for the Piste
//! track cycling platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Core data models (profiles, gears, lap sessions, event types)
//! - **validation**: Range checks for user-entered numeric input

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `Gear`, `LapSession`, `EventType`, etc.)
pub mod models;

/// Range validation for user-entered numeric input
pub mod validation;
