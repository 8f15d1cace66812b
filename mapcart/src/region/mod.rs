//! Region model.
//!
//! A [`Region`] is a named, identified shape the user drew on the map. Its
//! center is derived from its geometry and cannot be set on its own: every
//! path that changes the geometry recomputes the center.

mod naming;

pub use naming::{
    PlaceholderNamer, DEFAULT_PLACEHOLDER_PREFIX, DEFAULT_TIMESTAMP_FORMAT,
};

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{compute_center, Geometry, LonLat};

/// Opaque region identifier, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(Uuid);

impl RegionId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named geometric selection.
///
/// Serialized with its center; deserialization ignores any incoming center
/// and recomputes it from the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RegionRepr")]
pub struct Region {
    id: RegionId,
    name: String,
    geometry: Geometry,
    /// Derived from `geometry`.
    center: LonLat,
}

/// Wire form of a [`Region`]: everything but the derived center.
#[derive(Deserialize)]
struct RegionRepr {
    id: RegionId,
    name: String,
    geometry: Geometry,
}

impl From<RegionRepr> for Region {
    fn from(repr: RegionRepr) -> Self {
        Region::with_id(repr.id, repr.name, repr.geometry)
    }
}

impl Region {
    /// Create a region with a freshly generated id.
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self::with_id(RegionId::generate(), name, geometry)
    }

    /// Create a region with a known id.
    pub fn with_id(id: RegionId, name: impl Into<String>, geometry: Geometry) -> Self {
        let center = compute_center(&geometry);
        Self {
            id,
            name: name.into(),
            geometry,
            center,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn center(&self) -> LonLat {
        self.center
    }

    /// Replace the label.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the geometry and recompute the center from it.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.refresh_center();
    }

    /// Recompute the center from the current geometry.
    pub fn refresh_center(&mut self) {
        self.center = compute_center(&self.geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Geometry {
        Geometry::Polygon(vec![vec![[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]])
    }

    #[test]
    fn test_new_computes_center() {
        let region = Region::new("Square", square());
        assert_eq!(region.center(), LonLat::new(1.0, 1.0));
        assert_eq!(region.name(), "Square");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Region::new("a", square());
        let b = Region::new("b", square());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_set_geometry_recomputes_center() {
        let mut region = Region::new("Moving", square());
        region.set_geometry(Geometry::Point([5.0, 6.0]));
        assert_eq!(region.center(), LonLat::new(5.0, 6.0));
    }

    #[test]
    fn test_rename_keeps_id_and_geometry() {
        let mut region = Region::new("Old", square());
        let id = region.id();
        region.rename("New");
        assert_eq!(region.id(), id);
        assert_eq!(region.name(), "New");
        assert_eq!(region.geometry(), &square());
    }

    #[test]
    fn test_deserialized_center_is_refreshed() {
        let json = format!(
            r#"{{"id":"{}","name":"x","geometry":{{"type":"Point","coordinates":[1.0,2.0]}},"center":{{"lon":99.0,"lat":99.0}}}}"#,
            RegionId::generate()
        );
        let region: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(region.center(), LonLat::new(1.0, 2.0));
        assert_eq!(region.name(), "x");
    }

    #[test]
    fn test_deserialize_without_center() {
        let original = Region::new("Square", square());
        let mut value = serde_json::to_value(&original).unwrap();
        value.as_object_mut().unwrap().remove("center");

        let region: Region = serde_json::from_value(value).unwrap();
        assert_eq!(region, original);
    }

    #[test]
    fn test_region_id_display_is_uuid() {
        let id = RegionId::generate();
        assert_eq!(id.to_string().len(), 36);
    }
}
