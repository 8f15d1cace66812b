//! mapcart CLI - command-line interface
//!
//! Replays recorded map sessions, computes shape centers, and resolves place
//! names using the mapcart library.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use error::CliError;

#[derive(Parser)]
#[command(name = "mapcart")]
#[command(version = mapcart::VERSION)]
#[command(about = "Region cart tools for map annotation", long_about = None)]
struct Cli {
    /// Mirror log output to stdout
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded session file and print the resulting cart
    Replay {
        /// JSON array of session steps
        file: PathBuf,

        /// Name regions by coordinates instead of querying the geocoder
        #[arg(long)]
        offline: bool,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the center of a GeoJSON geometry or feature
    Center {
        /// GeoJSON file
        file: PathBuf,
    },

    /// Resolve a display name for a coordinate
    Geocode {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Skip the lookup and print the coordinate fallback
        #[arg(long)]
        offline: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Replay {
            file,
            offline,
            json,
        } => commands::replay::run(&file, offline, json, cli.verbose),
        Commands::Center { file } => commands::center::run(&file),
        Commands::Geocode { lat, lon, offline } => {
            commands::geocode::run(lat, lon, offline, cli.verbose)
        }
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
