//! Print the center of a GeoJSON geometry.

use std::path::Path;

use mapcart::geometry::{compute_center, Geometry, LonLat};
use serde_json::Value;

use crate::error::CliError;

/// Compute the center of a GeoJSON document.
///
/// Accepts a bare geometry or a `Feature` wrapping one.
pub fn center_of(path: &str, content: &str) -> Result<(Geometry, LonLat), CliError> {
    let invalid = |reason: String| CliError::InvalidInput {
        path: path.to_string(),
        reason,
    };

    let value: Value = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let geometry_value = match value.get("type").and_then(Value::as_str) {
        Some("Feature") => value.get("geometry").unwrap_or(&Value::Null),
        _ => &value,
    };

    let geometry = Geometry::from_geojson(geometry_value).map_err(|e| invalid(e.to_string()))?;
    let center = compute_center(&geometry);
    Ok((geometry, center))
}

/// Run the `center` command.
pub fn run(path: &Path) -> Result<(), CliError> {
    let display_path = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|error| CliError::FileRead {
        path: display_path.clone(),
        error,
    })?;

    let (geometry, center) = center_of(&display_path, &content)?;
    println!("{} center: {}", geometry.kind(), center);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_center() {
        let (geometry, center) = center_of(
            "square.json",
            r#"{"type":"Polygon","coordinates":[[[0,0],[0,2],[2,2],[2,0],[0,0]]]}"#,
        )
        .unwrap();
        assert_eq!(geometry.kind(), "Polygon");
        assert_eq!(center, LonLat::new(1.0, 1.0));
    }

    #[test]
    fn test_feature_is_unwrapped() {
        let (_, center) = center_of(
            "feature.json",
            r#"{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[3,4]}}"#,
        )
        .unwrap();
        assert_eq!(center, LonLat::new(3.0, 4.0));
    }

    #[test]
    fn test_unsupported_geometry_centers_at_origin() {
        let (_, center) = center_of(
            "line.json",
            r#"{"type":"LineString","coordinates":[[0,0],[4,4]]}"#,
        )
        .unwrap();
        assert_eq!(center, LonLat::ORIGIN);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            center_of("bad.json", "{not json"),
            Err(CliError::InvalidInput { .. })
        ));
    }
}
