//! Error types for reverse geocoding.

use thiserror::Error;

/// Errors a reverse geocoder can report.
///
/// None of these reach the workflow: [`super::NameResolver`] turns every one
/// of them into a coordinate fallback name.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    JsonError(String),

    /// The service answered but has no place for these coordinates.
    #[error("No place found at {lat}, {lon}")]
    NotFound { lat: f64, lon: f64 },

    /// The lookup did not finish in time.
    #[error("Lookup timed out after {0}s")]
    Timeout(u64),

    /// Lookups are turned off.
    #[error("Reverse geocoding is disabled")]
    Disabled,
}
