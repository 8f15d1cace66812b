//! Cart store - sole owner of the cart state.

use tokio::sync::broadcast;

use super::event::CartEvent;
use crate::region::{Region, RegionId};

/// Default capacity of the event broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Session-scoped cart contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// Committed regions, most recent first, unique by id.
    regions: Vec<Region>,
    /// Region being drawn, viewed or edited; not necessarily committed.
    selected_region: Option<Region>,
}

impl CartState {
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn selected_region(&self) -> Option<&Region> {
        self.selected_region.as_ref()
    }

    fn position(&self, id: &RegionId) -> Option<usize> {
        self.regions.iter().position(|r| r.id() == *id)
    }
}

/// State container for the cart.
///
/// Every operation is total: a missing id is an ordinary outcome, never an
/// error. Each operation applies its transition fully, then queues a
/// [`CartEvent`] for subscribers if anything changed.
#[derive(Debug)]
pub struct CartStore {
    state: CartState,
    events_tx: broadcast::Sender<CartEvent>,
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create an empty store with a custom event buffer size.
    pub fn with_event_capacity(capacity: usize) -> Self {
        let (events_tx, _) = broadcast::channel(capacity.max(1));
        Self {
            state: CartState::default(),
            events_tx,
        }
    }

    /// Subscribe to cart transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events_tx.subscribe()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn regions(&self) -> &[Region] {
        self.state.regions()
    }

    pub fn selected_region(&self) -> Option<&Region> {
        self.state.selected_region()
    }

    pub fn get(&self, id: &RegionId) -> Option<&Region> {
        self.state.regions.iter().find(|r| r.id() == *id)
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.state.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.state.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.regions.is_empty()
    }

    /// Insert a region at the front of the cart.
    ///
    /// A region whose id is already present is skipped, not overwritten.
    /// Returns true if the region was inserted.
    pub fn add_region(&mut self, mut region: Region) -> bool {
        let id = region.id();
        if self.contains(&id) {
            tracing::debug!(region_id = %id, "Region already in cart, skipping add");
            return false;
        }

        region.refresh_center();
        self.state.regions.insert(0, region);
        tracing::debug!(region_id = %id, cart_len = self.len(), "Region added to cart");
        self.notify(CartEvent::RegionAdded(id));
        true
    }

    /// Remove the region with this id, returning it if it was present.
    pub fn remove_region(&mut self, id: &RegionId) -> Option<Region> {
        let index = self.state.position(id)?;
        let removed = self.state.regions.remove(index);
        tracing::debug!(region_id = %id, cart_len = self.len(), "Region removed from cart");
        self.notify(CartEvent::RegionRemoved(*id));
        Some(removed)
    }

    /// Replace the region with the same id, keeping its position.
    ///
    /// Returns true if a region was replaced.
    pub fn update_region(&mut self, mut region: Region) -> bool {
        let id = region.id();
        let Some(index) = self.state.position(&id) else {
            tracing::debug!(region_id = %id, "Region not in cart, skipping update");
            return false;
        };

        region.refresh_center();
        self.state.regions[index] = region;
        tracing::debug!(region_id = %id, index, "Region updated in cart");
        self.notify(CartEvent::RegionUpdated(id));
        true
    }

    /// Empty the cart, returning how many regions were dropped.
    pub fn clear_cart(&mut self) -> usize {
        let removed = self.state.regions.len();
        self.state.regions.clear();
        tracing::debug!(removed, "Cart cleared");
        self.notify(CartEvent::CartCleared { removed });
        removed
    }

    /// Set or clear the selected region.
    ///
    /// The stored region's center is always recomputed from its geometry; a
    /// center carried in by the caller is not trusted.
    pub fn set_selected_region(&mut self, region: Option<Region>) {
        let region = region.map(|mut r| {
            r.refresh_center();
            r
        });
        let id = region.as_ref().map(Region::id);
        self.state.selected_region = region;
        self.notify(CartEvent::SelectionChanged(id));
    }

    fn notify(&self, event: CartEvent) {
        // No subscribers is fine; the store does not depend on being observed.
        let _ = self.events_tx.send(event);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
