//! Geometry module
//!
//! Provides the typed boundary description of drawn shapes and the
//! representative-center computation every region derives its center from.

mod geojson;
mod types;

pub use types::{Geometry, GeometryError, LonLat, Position, Ring};

/// Computes a representative center point for a geometry.
///
/// This is a plain vertex average, not an area centroid:
///
/// * `Polygon` - mean of the outer ring's vertices
/// * `MultiPolygon` - mean of the first ring of the first polygon
/// * `Point` - the point itself
/// * anything else, or a polygon without vertices - [`LonLat::ORIGIN`]
///
/// A ring whose last vertex repeats its first (GeoJSON closing vertex) is
/// averaged without the repeat, so closed and open rings of the same shape
/// share a center.
pub fn compute_center(geometry: &Geometry) -> LonLat {
    match geometry {
        Geometry::Point(p) => LonLat::from(*p),
        Geometry::Polygon(rings) => rings
            .first()
            .map(|ring| ring_mean(ring))
            .unwrap_or(LonLat::ORIGIN),
        Geometry::MultiPolygon(polygons) => polygons
            .first()
            .and_then(|rings| rings.first())
            .map(|ring| ring_mean(ring))
            .unwrap_or(LonLat::ORIGIN),
        Geometry::Unsupported(_) | Geometry::Empty => LonLat::ORIGIN,
    }
}

/// Arithmetic mean of a ring's distinct vertices.
fn ring_mean(ring: &[Position]) -> LonLat {
    let vertices = match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    };

    if vertices.is_empty() {
        return LonLat::ORIGIN;
    }

    let n = vertices.len() as f64;
    let (sum_lon, sum_lat) = vertices
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p[0], y + p[1]));

    LonLat::new(sum_lon / n, sum_lat / n)
}

#[cfg(test)]
mod tests;
