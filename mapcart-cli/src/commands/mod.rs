//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`center`] - Center of a GeoJSON geometry
//! - [`config`] - Configuration management (path, show, init)
//! - [`geocode`] - Name lookup for one coordinate
//! - [`replay`] - Run a recorded interaction through a session

pub mod center;
pub mod config;
pub mod geocode;
pub mod replay;
