//! INI parsing: `Ini` → [`ConfigFile`].
//!
//! The single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [geocoder] section
    if let Some(section) = ini.section(Some("geocoder")) {
        if let Some(v) = section.get("enabled") {
            config.geocoder.enabled = parse_bool(v);
        }
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(invalid("geocoder", "url", v, "must be an http:// or https:// URL"));
            }
            config.geocoder.url = v.to_string();
        }
        if let Some(v) = section.get("timeout_secs") {
            config.geocoder.timeout_secs = match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(invalid(
                        "geocoder",
                        "timeout_secs",
                        v,
                        "must be a positive integer (seconds)",
                    ))
                }
            };
        }
        if let Some(v) = section.get("user_agent") {
            let v = v.trim();
            if !v.is_empty() {
                config.geocoder.user_agent = v.to_string();
            }
        }
        if let Some(v) = section.get("language") {
            let v = v.trim();
            config.geocoder.language = (!v.is_empty()).then(|| v.to_string());
        }
        if let Some(v) = section.get("zoom") {
            config.geocoder.zoom = match v.trim().parse::<u8>() {
                Ok(zoom) if zoom <= 18 => zoom,
                _ => {
                    return Err(invalid(
                        "geocoder",
                        "zoom",
                        v,
                        "must be an integer between 0 and 18",
                    ))
                }
            };
        }
    }

    // [naming] section
    if let Some(section) = ini.section(Some("naming")) {
        if let Some(v) = section.get("placeholder_prefix") {
            config.naming.placeholder_prefix = v.trim().to_string();
        }
        if let Some(v) = section.get("timestamp_format") {
            if v.trim().is_empty() || !is_valid_time_format(v) {
                return Err(invalid(
                    "naming",
                    "timestamp_format",
                    v,
                    "must be a chrono strftime format such as %Y-%m-%d %H:%M:%S",
                ));
            }
            config.naming.timestamp_format = v.to_string();
        }
    }

    // [style] section
    if let Some(section) = ini.section(Some("style")) {
        for (key, field) in [
            ("default_color", &mut config.style.default_color),
            ("committed_color", &mut config.style.committed_color),
            ("selected_color", &mut config.style.selected_color),
        ] {
            if let Some(v) = section.get(key) {
                let v = v.trim();
                if !is_hex_color(v) {
                    return Err(invalid("style", key, v, "must be a hex color like #3388ff"));
                }
                *field = v.to_lowercase();
            }
        }
        if let Some(v) = section.get("weight") {
            config.style.weight = match v.trim().parse::<u8>() {
                Ok(weight) if weight > 0 => weight,
                _ => return Err(invalid("style", "weight", v, "must be a positive integer (pixels)")),
            };
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() || v.contains('/') {
                return Err(invalid("logging", "file", v, "must be a plain file name"));
            }
            config.logging.file = v.to_string();
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
