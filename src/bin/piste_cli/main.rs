// ABOUTME: Piste CLI - command-line gear and lap-time calculator
// ABOUTME: Computes ratios, gear tables, and converts lap-time strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors
//!
//! Usage:
//! ```bash
//! # Gear ratio for a 50x14 setup
//! piste-cli gear ratio --chainring 50 --sprocket 14
//!
//! # Gear inches and development with a custom wheel
//! piste-cli gear inches --chainring 50 --sprocket 14 --wheel 700
//! piste-cli gear development --chainring 50 --sprocket 14
//!
//! # Speed at 110 rpm, cadence needed for 55 km/h
//! piste-cli gear speed --chainring 50 --sprocket 14 --cadence 110
//! piste-cli gear cadence --chainring 50 --sprocket 14 --speed 55
//!
//! # Ratio chart over several combinations
//! piste-cli gear table --chainrings 48,50,52 --sprockets 14,15,16
//!
//! # Lap-time conversion
//! piste-cli time parse "1:23.456"
//! piste-cli time format 83456
//! ```

mod commands;

use clap::{Parser, Subcommand};
use piste::config::AppConfig;
use piste::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "piste-cli",
    about = "Gear and lap-time calculator for track cyclists",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Gear arithmetic: ratio, inches, development, speed, cadence
    #[command(subcommand)]
    Gear(commands::gear::GearCommand),
    /// Lap-time string conversion
    #[command(subcommand)]
    Time(commands::time::TimeCommand),
}

fn main() -> anyhow::Result<()> {
    LoggingConfig::from_env().init()?;
    let config = AppConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Gear(command) => commands::gear::run(&command, config.rider)?,
        Command::Time(command) => commands::time::run(&command)?,
    }
    Ok(())
}
