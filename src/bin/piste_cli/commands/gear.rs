// ABOUTME: Gear arithmetic subcommands for the Piste CLI
// ABOUTME: Validates teeth/wheel input at the boundary, then calls the calculation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

use clap::{Args, Subcommand};
use piste::config::RiderDefaults;
use piste_core::errors::{AppError, AppResult};
use piste_core::validation;
use piste_gearing::GearCalculator;

/// A chainring/sprocket pair with an optional wheel override
#[derive(Args)]
pub struct SetupArgs {
    /// Chainring teeth (30-70)
    #[arg(long)]
    chainring: u32,
    /// Sprocket teeth (10-25)
    #[arg(long)]
    sprocket: u32,
    /// Wheel diameter in millimeters (600-750); defaults to the configured rider preference
    #[arg(long)]
    wheel: Option<f64>,
}

impl SetupArgs {
    fn validated(&self, defaults: RiderDefaults) -> AppResult<(u32, u32, GearCalculator)> {
        validation::chainring_teeth(self.chainring)?;
        validation::sprocket_teeth(self.sprocket)?;
        let wheel = self.wheel.unwrap_or(defaults.wheel_diameter_mm);
        validation::wheel_diameter_mm(wheel)?;
        Ok((
            self.chainring,
            self.sprocket,
            GearCalculator::with_wheel_diameter(wheel),
        ))
    }
}

/// Ratio chart arguments
#[derive(Args)]
pub struct TableArgs {
    /// Comma-separated chainring teeth, e.g. 48,50,52
    #[arg(long, default_value = "48,50,52")]
    chainrings: String,
    /// Comma-separated sprocket teeth, e.g. 14,15,16
    #[arg(long, default_value = "14,15,16")]
    sprockets: String,
    /// Wheel diameter in millimeters (600-750)
    #[arg(long)]
    wheel: Option<f64>,
}

/// Gear arithmetic subcommands
#[derive(Subcommand)]
pub enum GearCommand {
    /// Gear ratio for one setup
    Ratio(SetupArgs),
    /// Gear inches for one setup
    Inches(SetupArgs),
    /// Development (meters per crank revolution) for one setup
    Development(SetupArgs),
    /// Speed in km/h at a given cadence
    Speed {
        /// The gear setup
        #[command(flatten)]
        setup: SetupArgs,
        /// Cadence in revolutions per minute
        #[arg(long)]
        cadence: f64,
    },
    /// Cadence in rpm needed to hold a given speed
    Cadence {
        /// The gear setup
        #[command(flatten)]
        setup: SetupArgs,
        /// Speed in km/h
        #[arg(long)]
        speed: f64,
    },
    /// Ratio chart over several chainring/sprocket combinations
    Table(TableArgs),
}

/// Execute a gear subcommand
///
/// # Errors
/// Returns `ValueOutOfRange`/`InvalidInput` for out-of-range or malformed input
pub fn run(command: &GearCommand, defaults: RiderDefaults) -> AppResult<()> {
    match command {
        GearCommand::Ratio(setup) => {
            let (chainring, sprocket, calc) = setup.validated(defaults)?;
            println!("{:.3}", calc.ratio(chainring, sprocket));
        }
        GearCommand::Inches(setup) => {
            let (chainring, sprocket, calc) = setup.validated(defaults)?;
            println!("{:.2}\"", calc.gear_inches(chainring, sprocket));
        }
        GearCommand::Development(setup) => {
            let (chainring, sprocket, calc) = setup.validated(defaults)?;
            println!("{:.2} m/rev", calc.development(chainring, sprocket));
        }
        GearCommand::Speed { setup, cadence } => {
            let (chainring, sprocket, calc) = setup.validated(defaults)?;
            println!(
                "{:.1} km/h",
                calc.speed_from_cadence(chainring, sprocket, *cadence)
            );
        }
        GearCommand::Cadence { setup, speed } => {
            let (chainring, sprocket, calc) = setup.validated(defaults)?;
            println!(
                "{:.0} rpm",
                calc.cadence_from_speed(chainring, sprocket, *speed)
            );
        }
        GearCommand::Table(args) => run_table(args, defaults)?,
    }
    Ok(())
}

fn run_table(args: &TableArgs, defaults: RiderDefaults) -> AppResult<()> {
    let chainrings = parse_teeth_list(&args.chainrings)?;
    let sprockets = parse_teeth_list(&args.sprockets)?;
    for &teeth in &chainrings {
        validation::chainring_teeth(teeth)?;
    }
    for &teeth in &sprockets {
        validation::sprocket_teeth(teeth)?;
    }
    let wheel = args.wheel.unwrap_or(defaults.wheel_diameter_mm);
    validation::wheel_diameter_mm(wheel)?;
    let calc = GearCalculator::with_wheel_diameter(wheel);

    println!("chainring x sprocket   ratio   inches   development");
    for &chainring in &chainrings {
        for &sprocket in &sprockets {
            let metrics = calc.metrics(chainring, sprocket);
            println!(
                "{chainring:>9} x {sprocket:<8} {:>6.3} {:>8.2} {:>10.2} m",
                metrics.ratio, metrics.gear_inches, metrics.development_m
            );
        }
    }
    Ok(())
}

fn parse_teeth_list(text: &str) -> AppResult<Vec<u32>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| AppError::invalid_input(format!("invalid teeth count: {part:?}")))
        })
        .collect()
}
