// ABOUTME: Application services built over the storage abstraction
// ABOUTME: Read-model aggregations consumed by the UI layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

/// Rider statistics aggregation
pub mod stats;
