//! CLI error handling with user-friendly messages.
//!
//! Centralizes error formatting and exit codes for every subcommand.

use std::fmt;
use std::process;

use mapcart::config::ConfigFileError;
use mapcart::geocode::GeocodeError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to read an input file
    FileRead { path: String, error: std::io::Error },
    /// Input file could not be interpreted
    InvalidInput { path: String, reason: String },
    /// Invalid command-line argument
    InvalidArgument(String),
    /// Failed to set up the geocoder
    Geocoder(GeocodeError),
    /// Failed to start the async runtime
    Runtime(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Check the file shown by: mapcart config path");
                eprintln!("Or write a fresh default with: mapcart config init --force");
            }
            CliError::InvalidInput { .. } => {
                eprintln!();
                eprintln!("Replay files are a JSON array of steps, for example:");
                eprintln!("  [{{\"action\": \"start-polygon\"}},");
                eprintln!("   {{\"action\": \"surface\", \"event\": {{\"type\": \"shape-created\", ...}}}},");
                eprintln!("   {{\"action\": \"confirm\", \"name\": \"Field\"}}]");
            }
            CliError::Geocoder(_) => {
                eprintln!();
                eprintln!("Use --offline to name regions by coordinates instead.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::InvalidInput { path, reason } => {
                write!(f, "Invalid input in '{}': {}", path, reason)
            }
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Geocoder(e) => write!(f, "Geocoder setup failed: {}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::FileRead { error, .. } => Some(error),
            CliError::Geocoder(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<GeocodeError> for CliError {
    fn from(e: GeocodeError) -> Self {
        CliError::Geocoder(e)
    }
}
