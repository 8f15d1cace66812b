//! Name resolution with a guaranteed result.

use std::sync::Arc;
use std::time::Duration;

use super::client::ReverseGeocoder;
use super::config::GeocoderConfig;
use crate::geometry::LonLat;

/// Format the coordinate fallback name, latitude first (`"9.082, 8.675"`).
pub fn fallback_name(center: LonLat) -> String {
    format!("{:.3}, {:.3}", center.lat, center.lon)
}

/// Resolves region names from their centers.
///
/// [`NameResolver::resolve`] always produces a name: any lookup failure,
/// empty answer, or timeout degrades to [`fallback_name`]. Cloning is cheap;
/// clones share the geocoder.
pub struct NameResolver<G> {
    geocoder: Arc<G>,
    timeout: Duration,
}

impl<G> Clone for NameResolver<G> {
    fn clone(&self) -> Self {
        Self {
            geocoder: Arc::clone(&self.geocoder),
            timeout: self.timeout,
        }
    }
}

impl<G: ReverseGeocoder> NameResolver<G> {
    pub fn new(geocoder: G, timeout: Duration) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            timeout,
        }
    }

    /// Create a resolver using the timeout from configuration.
    pub fn from_config(geocoder: G, config: &GeocoderConfig) -> Self {
        Self::new(geocoder, Duration::from_secs(config.timeout_secs()))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve a display name for `center`.
    pub async fn resolve(&self, center: LonLat) -> String {
        let lookup = self.geocoder.reverse_lookup(center.lat, center.lon);

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(name)) if !name.trim().is_empty() => name.trim().to_string(),
            Ok(Ok(_)) => {
                tracing::warn!(%center, "Reverse geocoder returned an empty name");
                fallback_name(center)
            }
            Ok(Err(e)) => {
                tracing::warn!(%center, error = %e, "Reverse geocode failed, using coordinates");
                fallback_name(center)
            }
            Err(_) => {
                tracing::warn!(
                    %center,
                    timeout_secs = self.timeout.as_secs(),
                    "Reverse geocode timed out, using coordinates"
                );
                fallback_name(center)
            }
        }
    }
}
