// ABOUTME: Subcommand implementations for the Piste CLI
// ABOUTME: Gear arithmetic and lap-time conversion commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

/// Gear arithmetic commands
pub mod gear;

/// Lap-time conversion commands
pub mod time;
