//! Surface events and their translation from raw payloads.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::LayerHandle;
use crate::geometry::{Geometry, GeometryError};

/// Errors raised while narrowing a raw surface payload.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The payload is not valid JSON or not a known event shape.
    #[error("Invalid surface event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    /// The event carries geometry that cannot be interpreted.
    #[error("Invalid geometry on {layer}: {source}")]
    InvalidGeometry {
        layer: LayerHandle,
        source: GeometryError,
    },
}

/// Event payload as emitted by the drawing plugin.
///
/// Geometry is left untyped here; [`translate`] validates it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RawSurfaceEvent {
    ShapeCreated { layer: LayerHandle, geometry: Value },
    ShapeEdited { layer: LayerHandle, geometry: Value },
}

/// A validated event from the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The user finished drawing a new shape.
    ShapeCreated {
        layer: LayerHandle,
        geometry: Geometry,
    },
    /// The user reshaped an existing layer.
    ShapeEdited {
        layer: LayerHandle,
        geometry: Geometry,
    },
}

impl SurfaceEvent {
    pub fn layer(&self) -> LayerHandle {
        match self {
            SurfaceEvent::ShapeCreated { layer, .. } | SurfaceEvent::ShapeEdited { layer, .. } => {
                *layer
            }
        }
    }
}

/// Narrow a raw event into a typed [`SurfaceEvent`].
pub fn translate(raw: RawSurfaceEvent) -> Result<SurfaceEvent, SurfaceError> {
    let narrow = |layer: LayerHandle, value: &Value| {
        Geometry::from_geojson(value)
            .map_err(|source| SurfaceError::InvalidGeometry { layer, source })
    };

    match raw {
        RawSurfaceEvent::ShapeCreated { layer, geometry } => Ok(SurfaceEvent::ShapeCreated {
            layer,
            geometry: narrow(layer, &geometry)?,
        }),
        RawSurfaceEvent::ShapeEdited { layer, geometry } => Ok(SurfaceEvent::ShapeEdited {
            layer,
            geometry: narrow(layer, &geometry)?,
        }),
    }
}

/// Parse and narrow a JSON event payload in one step.
pub fn parse_event(json: &str) -> Result<SurfaceEvent, SurfaceError> {
    let raw: RawSurfaceEvent = serde_json::from_str(json)?;
    translate(raw)
}
