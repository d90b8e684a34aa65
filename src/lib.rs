// ABOUTME: Main library entry point for the Piste track cycling platform
// ABOUTME: Application layer wiring configuration, storage, state containers, and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

#![deny(unsafe_code)]

//! # Piste
//!
//! Gear-ratio and lap-time tracking for track cyclists. Riders record the
//! chainrings and sprockets they own, compute derived ride metrics (ratio,
//! gear inches, development, speed/cadence conversion), and log lap-timing
//! sessions tied to a gear setup.
//!
//! ## Architecture
//!
//! - **`piste-core`**: foundation crate with errors, constants, models, and
//!   input validation
//! - **`piste-gearing`**: the pure calculation engine behind every derived
//!   number in the UI
//! - **this crate**: the application layer with configuration, logging, the
//!   storage abstraction, auth/profile state, and services
//!
//! The remote relational store and the identity provider are external
//! collaborators, represented only by the [`storage::StorageProvider`] and
//! [`state::auth::IdentityProvider`] trait boundaries.

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the CLI binary (src/bin/) and integration
// tests (tests/).

/// Environment-based application configuration
pub mod config;

/// Structured logging configuration and setup
pub mod logging;

/// Application services built over the storage abstraction
pub mod services;

/// Explicit application-state containers (auth/profile, toasts)
pub mod state;

/// Storage abstraction and the in-memory reference backend
pub mod storage;
