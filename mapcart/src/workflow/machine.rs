//! Selection workflow - translates surface events and user actions into cart
//! transitions and keeps layer styles in step with the cart.

use std::collections::HashMap;

use crate::cart::CartStore;
use crate::geometry::Geometry;
use crate::region::{PlaceholderNamer, Region, RegionId};
use crate::style::StylePalette;
use crate::surface::{DrawingSurface, LayerHandle, SurfaceEvent};

use super::state::{NameRequest, WorkflowState};

/// The selection/confirmation state machine.
///
/// Owns the [`CartStore`] and the [`DrawingSurface`]. At most one region is
/// selected at a time. After every transition the affected layers are
/// restyled from cart membership via [`StylePalette::style_for`], so the map
/// never disagrees with the cart for longer than one call.
///
/// # Layers
///
/// Every layer the workflow knows about is one of:
///
/// - the current selection (draft or committed region being edited),
/// - a committed region,
/// - a parked draft: drawn, never confirmed, and deselected when another
///   shape took the selection. Parked drafts keep their layer in the default
///   style and can be selected again.
#[derive(Debug)]
pub struct SelectionWorkflow<S> {
    store: CartStore,
    surface: S,
    palette: StylePalette,
    namer: PlaceholderNamer,
    /// Layer backing each known region.
    layers: HashMap<RegionId, LayerHandle>,
    /// Inverse of `layers`; a handle backs at most one region.
    regions_by_layer: HashMap<LayerHandle, RegionId>,
    /// Uncommitted drafts that lost the selection.
    parked: HashMap<RegionId, Region>,
    state: WorkflowState,
}

impl<S: DrawingSurface> SelectionWorkflow<S> {
    /// Create a workflow with an empty cart and default styling.
    pub fn new(surface: S) -> Self {
        Self::with_parts(
            CartStore::new(),
            surface,
            StylePalette::default(),
            PlaceholderNamer::default(),
        )
    }

    /// Create a workflow from explicit collaborators.
    pub fn with_parts(
        store: CartStore,
        surface: S,
        palette: StylePalette,
        namer: PlaceholderNamer,
    ) -> Self {
        Self {
            store,
            surface,
            palette,
            namer,
            layers: HashMap::new(),
            regions_by_layer: HashMap::new(),
            parked: HashMap::new(),
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn palette(&self) -> &StylePalette {
        &self.palette
    }

    /// Layer backing a region, if it is still on the map.
    pub fn layer_of(&self, id: &RegionId) -> Option<LayerHandle> {
        self.layers.get(id).copied()
    }

    /// Region drawn on a layer, if the workflow knows it.
    pub fn region_for_layer(&self, layer: LayerHandle) -> Option<RegionId> {
        self.regions_by_layer.get(&layer).copied()
    }

    /// Whether `id` is a draft that lost the selection without being committed.
    pub fn is_parked(&self, id: &RegionId) -> bool {
        self.parked.contains_key(id)
    }

    fn selected_id(&self) -> Option<RegionId> {
        self.store.selected_region().map(Region::id)
    }

    // ------------------------------------------------------------------
    // Drawing modes
    // ------------------------------------------------------------------

    pub fn start_polygon(&mut self) {
        tracing::debug!("Starting polygon drawing");
        self.surface.start_polygon();
    }

    pub fn start_rectangle(&mut self) {
        tracing::debug!("Starting rectangle drawing");
        self.surface.start_rectangle();
    }

    pub fn stop_drawing(&mut self) {
        tracing::debug!("Stopping drawing");
        self.surface.stop_drawing();
    }

    // ------------------------------------------------------------------
    // Surface events
    // ------------------------------------------------------------------

    /// Apply a validated surface event.
    ///
    /// Returns a [`NameRequest`] when a new region needs a name looked up.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) -> Option<NameRequest> {
        match event {
            SurfaceEvent::ShapeCreated { layer, geometry } => {
                Some(self.shape_created(layer, geometry))
            }
            SurfaceEvent::ShapeEdited { layer, geometry } => {
                self.shape_edited(layer, geometry);
                None
            }
        }
    }

    /// A new shape was drawn: it becomes the selected draft.
    ///
    /// Any previous selection is deselected first.
    pub fn shape_created(&mut self, layer: LayerHandle, geometry: Geometry) -> NameRequest {
        self.release_selection();

        let region = Region::new(self.namer.name_now(), geometry);
        let request = NameRequest {
            region_id: region.id(),
            center: region.center(),
        };

        tracing::debug!(
            region_id = %request.region_id,
            %layer,
            kind = region.geometry().kind(),
            center = %request.center,
            "Shape created"
        );

        self.bind_layer(request.region_id, layer);
        self.store.set_selected_region(Some(region));
        self.restyle(request.region_id);
        self.state = WorkflowState::Drafting;

        request
    }

    /// A layer was reshaped.
    ///
    /// If the layer belongs to the selection, the selection's geometry and
    /// center are refreshed in place. If it belongs to another known region,
    /// that region is selected first, then refreshed. The committed entry is
    /// untouched until [`SelectionWorkflow::confirm`].
    ///
    /// Returns false for layers the workflow does not know.
    pub fn shape_edited(&mut self, layer: LayerHandle, geometry: Geometry) -> bool {
        let Some(id) = self.region_for_layer(layer) else {
            tracing::debug!(%layer, "Edit on unknown layer ignored");
            return false;
        };

        if self.selected_id() != Some(id) && !self.select_region(id) {
            return false;
        }

        let Some(mut region) = self.store.selected_region().cloned() else {
            return false;
        };
        region.set_geometry(geometry);
        tracing::debug!(region_id = %id, center = %region.center(), "Selection reshaped");
        self.store.set_selected_region(Some(region));
        true
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    /// Select the region drawn on `layer`.
    ///
    /// Committed regions open in [`WorkflowState::Editing`]; parked drafts
    /// return to [`WorkflowState::Confirming`]. Returns false if the layer is
    /// unknown.
    pub fn select_layer(&mut self, layer: LayerHandle) -> bool {
        match self.region_for_layer(layer) {
            Some(id) => self.select_region(id),
            None => {
                tracing::debug!(%layer, "Select on unknown layer ignored");
                false
            }
        }
    }

    fn select_region(&mut self, id: RegionId) -> bool {
        if self.selected_id() == Some(id) {
            return true;
        }

        let committed = self.store.get(&id).cloned();
        if committed.is_none() && !self.parked.contains_key(&id) {
            return false;
        }

        self.release_selection();

        let (region, state) = match committed {
            Some(region) => (region, WorkflowState::Editing),
            None => match self.parked.remove(&id) {
                Some(region) => (region, WorkflowState::Confirming),
                None => return false,
            },
        };

        tracing::debug!(region_id = %id, state = %state, "Region selected");
        self.store.set_selected_region(Some(region));
        self.restyle(id);
        self.state = state;
        true
    }

    /// Apply a looked-up name to the selection.
    ///
    /// Dropped (returns false) if `region_id` is no longer the selected region,
    /// has already been committed, or the name is blank.
    pub fn apply_resolved_name(&mut self, region_id: RegionId, name: &str) -> bool {
        let name = name.trim();
        let Some(selected) = self.store.selected_region() else {
            tracing::debug!(%region_id, "Discarding name for cleared selection");
            return false;
        };

        if selected.id() != region_id || name.is_empty() {
            tracing::debug!(%region_id, "Discarding stale name");
            return false;
        }

        // Once committed, the region's name belongs to the user.
        if self.store.contains(&region_id) {
            tracing::debug!(%region_id, "Discarding name for committed region");
            return false;
        }

        let mut region = selected.clone();
        region.rename(name);
        self.store.set_selected_region(Some(region));
        if self.state == WorkflowState::Drafting {
            self.state = WorkflowState::Confirming;
        }
        true
    }

    /// Commit the selection to the cart.
    ///
    /// A non-blank `name_override` (after trimming) replaces the name; a blank
    /// one keeps it. A region already in the cart is updated in place, keeping
    /// its position; otherwise it is added at the front.
    ///
    /// Returns the committed id, or `None` if nothing was selected.
    pub fn confirm(&mut self, name_override: Option<&str>) -> Option<RegionId> {
        let Some(mut region) = self.store.selected_region().cloned() else {
            tracing::debug!("Confirm with no selection ignored");
            return None;
        };

        if let Some(name) = name_override.map(str::trim).filter(|n| !n.is_empty()) {
            region.rename(name);
        }

        let id = region.id();
        let name = region.name().to_string();
        let updated = if self.store.contains(&id) {
            self.store.update_region(region)
        } else {
            self.store.add_region(region);
            false
        };

        self.store.set_selected_region(None);
        self.restyle(id);
        self.state = WorkflowState::Idle;

        tracing::info!(
            region_id = %id,
            name = %name,
            updated,
            cart_len = self.store.len(),
            "Region committed"
        );
        Some(id)
    }

    /// Drop the selection without committing it.
    ///
    /// A draft's layer is removed from the map. A committed region keeps its
    /// layer and only loses the highlight. Returns false if nothing was
    /// selected.
    pub fn cancel(&mut self) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };

        self.store.set_selected_region(None);
        if self.store.contains(&id) {
            self.restyle(id);
        } else {
            self.discard_layer(id);
        }
        self.state = WorkflowState::Idle;

        tracing::debug!(region_id = %id, "Selection cancelled");
        true
    }

    /// Remove a committed region from the cart and its layer from the map.
    pub fn remove_region(&mut self, id: &RegionId) -> bool {
        if self.store.remove_region(id).is_none() {
            return false;
        }

        if self.selected_id() == Some(*id) {
            self.store.set_selected_region(None);
            self.state = WorkflowState::Idle;
        }
        self.discard_layer(*id);
        true
    }

    /// Empty the cart and remove every committed layer from the map.
    ///
    /// A selected draft survives; a selected committed region is dropped with
    /// the rest.
    pub fn clear_cart(&mut self) -> usize {
        let committed: Vec<RegionId> = self.store.regions().iter().map(Region::id).collect();

        if let Some(selected) = self.selected_id() {
            if committed.contains(&selected) {
                self.store.set_selected_region(None);
                self.state = WorkflowState::Idle;
            }
        }

        let removed = self.store.clear_cart();
        for id in committed {
            self.discard_layer(id);
        }

        tracing::info!(removed, "Cart cleared");
        removed
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Deselect the current selection, if any.
    ///
    /// Committed regions fall back to the committed style. Drafts are parked
    /// and fall back to the default style.
    fn release_selection(&mut self) {
        let Some(region) = self.store.selected_region().cloned() else {
            return;
        };

        let id = region.id();
        self.store.set_selected_region(None);
        if !self.store.contains(&id) {
            self.parked.insert(id, region);
        }
        self.restyle(id);
        self.state = WorkflowState::Idle;
    }

    /// Project cart membership and selection onto the region's layer.
    fn restyle(&mut self, id: RegionId) {
        let Some(layer) = self.layers.get(&id).copied() else {
            return;
        };

        let in_cart = self.store.contains(&id);
        let selected = self.selected_id() == Some(id);
        let style = self.palette.style_for(in_cart, selected);
        self.surface.set_style(layer, &style);
    }

    /// Record that `layer` backs `id`.
    ///
    /// A handle the surface reuses stops backing whatever region it backed
    /// before; an uncommitted draft left without a layer is forgotten.
    fn bind_layer(&mut self, id: RegionId, layer: LayerHandle) {
        if let Some(previous) = self.regions_by_layer.insert(layer, id) {
            if previous != id {
                tracing::warn!(
                    %layer,
                    region_id = %previous,
                    "Layer handle reused, unbinding old region"
                );
                self.layers.remove(&previous);
                self.parked.remove(&previous);
            }
        }
        self.layers.insert(id, layer);
    }

    fn discard_layer(&mut self, id: RegionId) {
        self.parked.remove(&id);
        if let Some(layer) = self.layers.remove(&id) {
            self.regions_by_layer.remove(&layer);
            self.surface.remove_layer(layer);
        }
    }
}
