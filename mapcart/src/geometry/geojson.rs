//! Translation between untyped GeoJSON values and [`Geometry`].
//!
//! The drawing surface hands out geometry as loosely typed JSON. Everything is
//! narrowed here before it reaches the region model.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use super::types::{Geometry, GeometryError, Position, Ring};

impl Geometry {
    /// Narrow a GeoJSON geometry object into a typed [`Geometry`].
    ///
    /// `null` maps to [`Geometry::Empty`]. Unknown geometry types map to
    /// [`Geometry::Unsupported`]; only malformed coordinates of a supported
    /// type are an error.
    pub fn from_geojson(value: &Value) -> Result<Self, GeometryError> {
        if value.is_null() {
            return Ok(Geometry::Empty);
        }

        let object = value.as_object().ok_or(GeometryError::NotAnObject)?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(GeometryError::MissingType)?;

        let coords = match kind {
            "Point" | "Polygon" | "MultiPolygon" => object
                .get("coordinates")
                .ok_or_else(|| GeometryError::MissingCoordinates(kind.to_string()))?,
            other => return Ok(Geometry::Unsupported(other.to_string())),
        };

        match kind {
            "Point" => Ok(Geometry::Point(parse_position(coords, kind)?)),
            "Polygon" => Ok(Geometry::Polygon(parse_rings(coords, kind)?)),
            _ => {
                let polygons = as_array(coords, kind)?
                    .iter()
                    .map(|polygon| parse_rings(polygon, kind))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Geometry::MultiPolygon(polygons))
            }
        }
    }

    /// Render this geometry as a GeoJSON value.
    pub fn to_geojson(&self) -> Value {
        match self {
            Geometry::Point(p) => json!({ "type": "Point", "coordinates": p }),
            Geometry::Polygon(rings) => json!({ "type": "Polygon", "coordinates": rings }),
            Geometry::MultiPolygon(polygons) => {
                json!({ "type": "MultiPolygon", "coordinates": polygons })
            }
            Geometry::Unsupported(kind) => json!({ "type": kind }),
            Geometry::Empty => Value::Null,
        }
    }
}

fn as_array<'a>(value: &'a Value, kind: &str) -> Result<&'a Vec<Value>, GeometryError> {
    value
        .as_array()
        .ok_or_else(|| GeometryError::MalformedCoordinates {
            kind: kind.to_string(),
            reason: format!("expected an array, found {}", value),
        })
}

fn parse_position(value: &Value, kind: &str) -> Result<Position, GeometryError> {
    let items = as_array(value, kind)?;
    let malformed = || GeometryError::MalformedCoordinates {
        kind: kind.to_string(),
        reason: format!("expected [lon, lat], found {}", value),
    };

    // Extra members (altitude) are tolerated and ignored.
    if items.len() < 2 {
        return Err(malformed());
    }
    let lon = items[0].as_f64().ok_or_else(malformed)?;
    let lat = items[1].as_f64().ok_or_else(malformed)?;
    Ok([lon, lat])
}

fn parse_rings(value: &Value, kind: &str) -> Result<Vec<Ring>, GeometryError> {
    as_array(value, kind)?
        .iter()
        .map(|ring| {
            as_array(ring, kind)?
                .iter()
                .map(|p| parse_position(p, kind))
                .collect::<Result<Ring, _>>()
        })
        .collect()
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_geojson().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Geometry::from_geojson(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let value = json!({ "type": "Point", "coordinates": [8.6753, 9.082] });
        assert_eq!(
            Geometry::from_geojson(&value).unwrap(),
            Geometry::Point([8.6753, 9.082])
        );
    }

    #[test]
    fn test_parse_point_with_altitude() {
        let value = json!({ "type": "Point", "coordinates": [1.0, 2.0, 300.0] });
        assert_eq!(
            Geometry::from_geojson(&value).unwrap(),
            Geometry::Point([1.0, 2.0])
        );
    }

    #[test]
    fn test_parse_polygon() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0], [0.0, 0.0]]]
        });
        match Geometry::from_geojson(&value).unwrap() {
            Geometry::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 5);
            }
            other => panic!("Expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_multipolygon() {
        let value = json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]]]
            ]
        });
        match Geometry::from_geojson(&value).unwrap() {
            Geometry::MultiPolygon(polygons) => assert_eq!(polygons.len(), 2),
            other => panic!("Expected multipolygon, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_unsupported_not_error() {
        let value = json!({ "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] });
        assert_eq!(
            Geometry::from_geojson(&value).unwrap(),
            Geometry::Unsupported("LineString".to_string())
        );
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(Geometry::from_geojson(&Value::Null).unwrap(), Geometry::Empty);
    }

    #[test]
    fn test_missing_type() {
        let value = json!({ "coordinates": [1.0, 2.0] });
        assert_eq!(
            Geometry::from_geojson(&value),
            Err(GeometryError::MissingType)
        );
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            Geometry::from_geojson(&json!([1.0, 2.0])),
            Err(GeometryError::NotAnObject)
        );
    }

    #[test]
    fn test_missing_coordinates() {
        let value = json!({ "type": "Polygon" });
        assert!(matches!(
            Geometry::from_geojson(&value),
            Err(GeometryError::MissingCoordinates(_))
        ));
    }

    #[test]
    fn test_malformed_position() {
        let value = json!({ "type": "Point", "coordinates": ["a", 2.0] });
        assert!(matches!(
            Geometry::from_geojson(&value),
            Err(GeometryError::MalformedCoordinates { .. })
        ));
    }

    #[test]
    fn test_serde_uses_geojson_shape() {
        let geometry = Geometry::Point([3.0, 4.0]);
        let text = serde_json::to_string(&geometry).unwrap();
        assert_eq!(text, r#"{"coordinates":[3.0,4.0],"type":"Point"}"#);

        let back: Geometry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, geometry);
    }
}
