//! Reverse geocoder trait and Nominatim implementation.
//!
//! The [`ReverseGeocoder`] trait abstracts the lookup service so the resolver
//! and the session loop can be exercised without a network. The
//! [`NominatimGeocoder`] talks to an OpenStreetMap Nominatim `/reverse`
//! endpoint via `reqwest`.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use super::config::GeocoderConfig;
use super::error::GeocodeError;

/// Trait for turning coordinates into a display name.
pub trait ReverseGeocoder: Send + Sync {
    /// Look up a human-readable name for a location.
    fn reverse_lookup(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl Future<Output = Result<String, GeocodeError>> + Send;
}

/// Subset of the Nominatim `jsonv2` reverse response we use.
///
/// Nominatim answers `200 OK` with an `error` member when nothing is found.
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    display_name: Option<String>,
    error: Option<String>,
}

/// Reverse geocoder backed by a Nominatim server.
pub struct NominatimGeocoder {
    /// Reusable HTTP client with connection pooling.
    http: reqwest::Client,

    /// Reverse endpoint URL.
    url: String,

    /// Preferred response language.
    language: Option<String>,

    /// Nominatim detail level.
    zoom: u8,
}

impl NominatimGeocoder {
    /// Create a geocoder from configuration.
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| GeocodeError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: config.url().to_string(),
            language: config.language().map(str::to_string),
            zoom: config.zoom(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse_lookup(&self, lat: f64, lon: f64) -> Result<String, GeocodeError> {
        let mut request = self.http.get(&self.url).query(&[
            ("format", "jsonv2".to_string()),
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("zoom", self.zoom.to_string()),
        ]);
        if let Some(language) = &self.language {
            request = request.header("Accept-Language", language);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(
                url = %self.url,
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "Reverse geocode request failed"
            );
            GeocodeError::HttpError(format!("Request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(GeocodeError::HttpError(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeocodeError::HttpError(format!("Failed to read response: {}", e)))?;

        let name = parse_response(&bytes, lat, lon)?;
        tracing::debug!(lat, lon, name = %name, "Reverse geocode resolved");
        Ok(name)
    }
}

/// Extract the display name from a Nominatim response body.
fn parse_response(bytes: &[u8], lat: f64, lon: f64) -> Result<String, GeocodeError> {
    let body: NominatimResponse =
        serde_json::from_slice(bytes).map_err(|e| GeocodeError::JsonError(e.to_string()))?;

    if let Some(error) = body.error {
        tracing::debug!(lat, lon, error = %error, "Nominatim returned no place");
        return Err(GeocodeError::NotFound { lat, lon });
    }

    body.display_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(GeocodeError::NotFound { lat, lon })
}

/// Geocoder that never looks anything up.
///
/// Every lookup fails with [`GeocodeError::Disabled`], so names always come
/// from the coordinate fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGeocoder;

impl ReverseGeocoder for OfflineGeocoder {
    async fn reverse_lookup(&self, _lat: f64, _lon: f64) -> Result<String, GeocodeError> {
        Err(GeocodeError::Disabled)
    }
}
