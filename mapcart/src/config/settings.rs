//! Settings structs for each configuration section.
//!
//! Each struct maps to one `[section]` of `config.ini`. Parsing lives in
//! [`super::parser`], serialization in [`super::writer`].

use std::path::PathBuf;

use crate::geocode::{
    default_user_agent, GeocoderConfig, DEFAULT_GEOCODER_TIMEOUT_SECS, DEFAULT_GEOCODER_URL,
    DEFAULT_GEOCODER_ZOOM,
};
use crate::logging::{default_log_dir, DEFAULT_LOG_FILE};
use crate::region::{PlaceholderNamer, DEFAULT_PLACEHOLDER_PREFIX, DEFAULT_TIMESTAMP_FORMAT};
use crate::style::{
    StylePalette, DEFAULT_COLOR, DEFAULT_COMMITTED_COLOR, DEFAULT_SELECTED_COLOR, DEFAULT_WEIGHT,
};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub geocoder: GeocoderSettings,
    pub naming: NamingSettings,
    pub style: StyleSettings,
    pub logging: LoggingSettings,
}

/// `[geocoder]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderSettings {
    /// When false, names always come from coordinates
    pub enabled: bool,
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Accept-Language for lookups (unset means the service default)
    pub language: Option<String>,
    pub zoom: u8,
}

impl Default for GeocoderSettings {
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

/// `[naming]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct NamingSettings {
    pub placeholder_prefix: String,
    /// chrono format string for the placeholder timestamp
    pub timestamp_format: String,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// `[style]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSettings {
    pub default_color: String,
    pub committed_color: String,
    pub selected_color: String,
    pub weight: u8,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            committed_color: DEFAULT_COMMITTED_COLOR.to_string(),
            selected_color: DEFAULT_SELECTED_COLOR.to_string(),
            weight: DEFAULT_WEIGHT,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl ConfigFile {
    /// Geocoder component configuration.
    pub fn geocoder_config(&self) -> GeocoderConfig {
        let g = &self.geocoder;
        let mut config = GeocoderConfig::new()
            .with_enabled(g.enabled)
            .with_url(g.url.clone())
            .with_timeout_secs(g.timeout_secs)
            .with_user_agent(g.user_agent.clone())
            .with_zoom(g.zoom);
        if let Some(language) = &g.language {
            config = config.with_language(language.clone());
        }
        config
    }

    pub fn style_palette(&self) -> StylePalette {
        StylePalette {
            default_color: self.style.default_color.clone(),
            committed_color: self.style.committed_color.clone(),
            selected_color: self.style.selected_color.clone(),
            weight: self.style.weight,
        }
    }

    pub fn placeholder_namer(&self) -> PlaceholderNamer {
        PlaceholderNamer::new(
            self.naming.placeholder_prefix.clone(),
            self.naming.timestamp_format.clone(),
        )
    }
}
