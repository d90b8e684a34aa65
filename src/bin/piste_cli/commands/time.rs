// ABOUTME: Lap-time conversion subcommands for the Piste CLI
// ABOUTME: Formats milliseconds for display and parses human-entered time strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

use clap::Subcommand;
use piste_core::errors::AppResult;
use piste_gearing::{format_time, parse_time_strict};

/// Lap-time conversion subcommands
#[derive(Subcommand)]
pub enum TimeCommand {
    /// Format a millisecond lap time for display
    Format {
        /// Lap time in milliseconds
        milliseconds: u64,
    },
    /// Parse a lap-time string (SS.mmm or M:SS.mmm) to milliseconds
    Parse {
        /// The time string to parse
        text: String,
    },
}

/// Execute a time subcommand
///
/// # Errors
/// Returns `InvalidFormat` when the time string cannot be parsed
pub fn run(command: &TimeCommand) -> AppResult<()> {
    match command {
        TimeCommand::Format { milliseconds } => {
            println!("{}", format_time(*milliseconds));
        }
        TimeCommand::Parse { text } => {
            let ms = parse_time_strict(text)?;
            println!("{ms} ms ({})", format_time(ms));
        }
    }
    Ok(())
}
