//! Reverse-name resolution.
//!
//! Turns a region's center into a human-readable label. The lookup itself is
//! an external service behind the [`ReverseGeocoder`] trait; the
//! [`NameResolver`] wraps it so callers always get *some* name back.
//!
//! # Architecture
//!
//! ```text
//! NameResolver::resolve(center)
//!     │
//!     ├── ReverseGeocoder trait → NominatimGeocoder (reqwest)
//!     │                         → OfflineGeocoder (always disabled)
//!     │
//!     └── timeout / error / empty → fallback_name(center) = "lat, lon"
//! ```

mod client;
mod config;
mod error;
mod resolver;

pub use client::{NominatimGeocoder, OfflineGeocoder, ReverseGeocoder};
pub use config::{
    default_user_agent, GeocoderConfig, DEFAULT_GEOCODER_TIMEOUT_SECS, DEFAULT_GEOCODER_URL,
    DEFAULT_GEOCODER_ZOOM,
};
pub use error::GeocodeError;
pub use resolver::{fallback_name, NameResolver};
