// ABOUTME: Explicit application-state containers
// ABOUTME: Auth/profile store and toast notification queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

//! Application-state containers
//!
//! Ambient global mutation is re-architected as explicit containers with
//! defined transition operations, each independently testable.

/// Auth/profile state container with explicit transitions
pub mod auth;

/// Toast notification queue
pub mod toast;
