//! INI serialization: [`ConfigFile`] → commented INI text.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let enabled = if config.geocoder.enabled { "true" } else { "false" };
    let language = config.geocoder.language.as_deref().unwrap_or("");

    format!(
        r#"[geocoder]
; Look up place names for new regions (false = always use coordinates)
enabled = {}
; Nominatim-compatible reverse geocoding endpoint
url = {}
; Seconds to wait before falling back to "lat, lon" names
timeout_secs = {}
; User-Agent header sent with lookups (required by Nominatim's usage policy)
user_agent = {}
; Preferred language for names, e.g. en, fr, de (empty = service default)
language = {}
; Detail level, 0 (country) to 18 (building)
zoom = {}

[naming]
; Names given to new regions until a place name arrives
placeholder_prefix = {}
; chrono strftime format for the placeholder timestamp
timestamp_format = {}

[style]
; Hex stroke colors for shapes outside the cart, in the cart, and selected
default_color = {}
committed_color = {}
selected_color = {}
; Stroke weight in pixels
weight = {}

[logging]
directory = {}
file = {}
"#,
        enabled,
        config.geocoder.url,
        config.geocoder.timeout_secs,
        config.geocoder.user_agent,
        language,
        config.geocoder.zoom,
        config.naming.placeholder_prefix,
        config.naming.timestamp_format,
        config.style.default_color,
        config.style.committed_color,
        config.style.selected_color,
        config.style.weight,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Render a path, abbreviating the home directory as `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::super::parser::parse_ini;
    use super::*;
    use ini::Ini;
    use std::path::PathBuf;

    #[test]
    fn test_default_output_parses_back() {
        let config = ConfigFile::default();
        let text = to_config_string(&config);
        let parsed = parse_ini(&Ini::load_from_str(&text).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_customized_values_written() {
        let mut config = ConfigFile::default();
        config.geocoder.enabled = false;
        config.geocoder.language = Some("fr".to_string());
        config.style.weight = 6;
        config.logging.directory = PathBuf::from("/srv/mapcart/logs");

        let text = to_config_string(&config);
        assert!(text.contains("enabled = false"));
        assert!(text.contains("language = fr"));
        assert!(text.contains("weight = 6"));
        assert!(text.contains("directory = /srv/mapcart/logs"));
    }

    #[test]
    fn test_home_paths_abbreviated() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join(".mapcart/logs")), "~/.mapcart/logs");
        }
    }
}
