//! Drawing surface boundary.
//!
//! The map widget and its drawing plugin live outside this crate. The core
//! talks to them through the [`DrawingSurface`] trait and receives their
//! events as [`SurfaceEvent`]s, which are narrowed from untyped JSON by
//! [`translate`] before anything reaches the workflow.
//!
//! # Architecture
//!
//! ```text
//! map widget ──JSON──► RawSurfaceEvent ──translate()──► SurfaceEvent ──► workflow
//!      ▲                                                                    │
//!      └──────────── DrawingSurface (remove_layer, set_style, ...) ◄────────┘
//! ```

mod event;
mod headless;

pub use event::{parse_event, translate, RawSurfaceEvent, SurfaceError, SurfaceEvent};
pub use headless::{HeadlessSurface, SurfaceCall};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::LayerStyle;

/// Opaque identifier the drawing surface assigns to each drawn layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerHandle(pub u64);

impl fmt::Display for LayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Operations the core may request from the drawing surface.
///
/// Calls are fire-and-forget: the surface owns its layers and the core never
/// reads visual state back.
pub trait DrawingSurface {
    /// Enter polygon drawing mode.
    fn start_polygon(&mut self);

    /// Enter rectangle drawing mode.
    fn start_rectangle(&mut self);

    /// Leave any drawing mode.
    fn stop_drawing(&mut self);

    /// Remove a layer from the map.
    fn remove_layer(&mut self, layer: LayerHandle);

    /// Restyle a layer.
    fn set_style(&mut self, layer: LayerHandle, style: &LayerStyle);
}
