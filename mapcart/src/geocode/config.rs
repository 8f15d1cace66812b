//! Reverse geocoder configuration.

/// Default Nominatim reverse endpoint.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Default lookup timeout.
pub const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 10;

/// Default detail level requested from Nominatim (14 = suburb).
pub const DEFAULT_GEOCODER_ZOOM: u8 = 14;

/// User-Agent sent with lookups. Nominatim's usage policy requires one.
pub fn default_user_agent() -> String {
    format!("mapcart/{}", crate::VERSION)
}

/// Configuration for reverse-name resolution.
///
/// # Example
///
/// ```
/// use mapcart::geocode::GeocoderConfig;
///
/// let config = GeocoderConfig::new()
///     .with_timeout_secs(3)
///     .with_language("fr");
/// assert_eq!(config.timeout_secs(), 3);
/// assert_eq!(config.language(), Some("fr"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocoderConfig {
    /// Whether lookups are made at all
    enabled: bool,
    /// Reverse endpoint URL
    url: String,
    /// Time to wait for a lookup before falling back (in seconds)
    timeout_secs: u64,
    /// User-Agent header value
    user_agent: String,
    /// Preferred response language (Accept-Language)
    language: Option<String>,
    /// Nominatim detail level
    zoom: u8,
}

impl GeocoderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable lookups.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the reverse endpoint URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the lookup timeout in seconds.
    ///
    /// A lookup that takes longer is abandoned and the coordinate fallback is
    /// used. Default: 10 seconds.
    pub fn with_timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_GEOCODER_URL.to_string(),
            timeout_secs: DEFAULT_GEOCODER_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            language: None,
            zoom: DEFAULT_GEOCODER_ZOOM,
        }
    }
}
