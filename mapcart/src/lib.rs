//! mapcart - region cart and selection workflow for map annotation
//!
//! Users draw polygons and rectangles on a map, review each shape, and commit
//! the ones they want to keep into a *cart*. This crate holds everything but
//! the map widget itself:
//!
//! - [`geometry`]: GeoJSON-shaped geometry and its center
//! - [`region`]: the named, identified shape kept in the cart
//! - [`cart`]: the observable cart store
//! - [`workflow`]: the draw / confirm / edit state machine
//! - [`geocode`]: reverse-name resolution with a coordinate fallback
//! - [`session`]: a tokio command loop tying the workflow to lookups
//! - [`surface`]: the boundary to the drawing widget
//!
//! # Example
//!
//! ```
//! use mapcart::geometry::Geometry;
//! use mapcart::surface::{HeadlessSurface, LayerHandle};
//! use mapcart::workflow::SelectionWorkflow;
//!
//! let mut workflow = SelectionWorkflow::new(HeadlessSurface::new());
//! let request = workflow.shape_created(
//!     LayerHandle(1),
//!     Geometry::rectangle([0.0, 0.0], [2.0, 2.0]),
//! );
//! workflow.apply_resolved_name(request.region_id, "Field");
//! workflow.confirm(None);
//!
//! assert_eq!(workflow.store().regions()[0].name(), "Field");
//! ```

pub mod cart;
pub mod config;
pub mod geocode;
pub mod geometry;
pub mod logging;
pub mod region;
pub mod session;
pub mod style;
pub mod surface;
pub mod workflow;

/// Version of the mapcart library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
