//! Placeholder names for freshly drawn regions.

use chrono::{DateTime, Local, TimeZone};

/// Default label prefix for new regions.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "Region";

/// Default chrono format for the placeholder timestamp.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Produces timestamp-derived names such as `Region 2026-10-18 14:03:11`.
///
/// Used until reverse geocoding replaces the name, or kept for good when the
/// lookup is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderNamer {
    prefix: String,
    timestamp_format: String,
}

impl PlaceholderNamer {
    pub fn new(prefix: impl Into<String>, timestamp_format: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Name for a region created now.
    pub fn name_now(&self) -> String {
        self.name_at(&Local::now())
    }

    /// Name for a region created at `time`.
    pub fn name_at<Tz>(&self, time: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let stamp = time.format(&self.timestamp_format).to_string();
        let prefix = self.prefix.trim();
        if prefix.is_empty() {
            stamp
        } else {
            format!("{} {}", prefix, stamp)
        }
    }
}

impl Default for PlaceholderNamer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_PREFIX, DEFAULT_TIMESTAMP_FORMAT)
    }
}
