//! Geometry type definitions

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single `[lon, lat]` vertex, in GeoJSON axis order.
pub type Position = [f64; 2];

/// A closed or open sequence of vertices.
pub type Ring = Vec<Position>;

/// Representative point of a shape, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LonLat {
    /// X coordinate (east-west)
    pub lon: f64,
    /// Y coordinate (north-south)
    pub lat: f64,
}

impl LonLat {
    /// The `(0, 0)` fallback used for shapes without a usable boundary.
    pub const ORIGIN: Self = Self { lon: 0.0, lat: 0.0 };

    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<Position> for LonLat {
    fn from(p: Position) -> Self {
        Self { lon: p[0], lat: p[1] }
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// Boundary description of a drawn shape.
///
/// Mirrors the subset of GeoJSON geometries the drawing surface produces.
/// Anything else is kept as [`Geometry::Unsupported`] rather than rejected, so
/// the shape can still be carried around with a fallback center.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single point.
    Point(Position),
    /// Outer ring followed by optional holes.
    Polygon(Vec<Ring>),
    /// A list of polygons.
    MultiPolygon(Vec<Vec<Ring>>),
    /// A GeoJSON geometry type the core does not interpret (LineString, ...).
    Unsupported(String),
    /// No geometry at all (`null` in GeoJSON).
    Empty,
}

impl Geometry {
    /// GeoJSON `type` name of this geometry.
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Unsupported(kind) => kind,
            Geometry::Empty => "Empty",
        }
    }

    /// Builds an axis-aligned rectangle polygon from two opposite corners.
    ///
    /// The ring is closed and wound south-west, north-west, north-east,
    /// south-east, the same order the rectangle tool emits.
    pub fn rectangle(a: Position, b: Position) -> Self {
        let (west, east) = (a[0].min(b[0]), a[0].max(b[0]));
        let (south, north) = (a[1].min(b[1]), a[1].max(b[1]));
        Geometry::Polygon(vec![vec![
            [west, south],
            [west, north],
            [east, north],
            [east, south],
            [west, south],
        ]])
    }
}

/// Errors raised while narrowing an untyped GeoJSON value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The value is not a JSON object.
    #[error("Geometry must be a JSON object")]
    NotAnObject,

    /// The object has no string `type` member.
    #[error("Geometry is missing its 'type' member")]
    MissingType,

    /// A supported type without a `coordinates` member.
    #[error("{0} geometry is missing its 'coordinates' member")]
    MissingCoordinates(String),

    /// Coordinates are not shaped the way the type requires.
    #[error("Malformed {kind} coordinates: {reason}")]
    MalformedCoordinates { kind: String, reason: String },
}
