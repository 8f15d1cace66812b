//! Cart state container.
//!
//! The [`CartStore`] exclusively owns the [`CartState`]: the committed regions
//! and the one region currently selected for confirmation. Other components
//! read through it and mutate only through its five operations:
//!
//! - [`CartStore::add_region`] - insert at the front unless the id exists
//! - [`CartStore::remove_region`] - drop by id if present
//! - [`CartStore::update_region`] - replace in place if present
//! - [`CartStore::clear_cart`] - drop everything
//! - [`CartStore::set_selected_region`] - set or clear the selection
//!
//! Transitions are published as [`CartEvent`]s on a broadcast channel.

mod event;
mod store;

pub use event::CartEvent;
pub use store::{CartState, CartStore, DEFAULT_EVENT_CAPACITY};
