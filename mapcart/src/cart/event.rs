//! Notifications emitted after cart transitions.

use crate::region::RegionId;

/// A completed cart transition.
///
/// Events are queued on a broadcast channel after the transition has been
/// applied, so a subscriber reacting to one can never observe or interrupt a
/// half-applied change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new region was placed at the front of the cart.
    RegionAdded(RegionId),
    /// A committed region was replaced in place.
    RegionUpdated(RegionId),
    /// A committed region was removed.
    RegionRemoved(RegionId),
    /// The cart was emptied.
    CartCleared { removed: usize },
    /// The selected region was set, replaced, or cleared.
    SelectionChanged(Option<RegionId>),
}
