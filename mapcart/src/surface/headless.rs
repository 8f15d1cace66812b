//! In-memory drawing surface.
//!
//! Records every call it receives and tracks the resulting layer styles.
//! Used for replaying recorded sessions without a map widget, and in tests.

use std::collections::{BTreeMap, BTreeSet};

use super::{DrawingSurface, LayerHandle};
use crate::style::{LayerStyle, StyleRole};

/// A call received by the [`HeadlessSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    StartPolygon,
    StartRectangle,
    StopDrawing,
    RemoveLayer(LayerHandle),
    SetStyle(LayerHandle, StyleRole),
}

/// Surface without a display.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    calls: Vec<SurfaceCall>,
    styles: BTreeMap<LayerHandle, LayerStyle>,
    removed: BTreeSet<LayerHandle>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Last style applied to a layer still on the surface.
    pub fn style_of(&self, layer: LayerHandle) -> Option<&LayerStyle> {
        self.styles.get(&layer)
    }

    /// Role of the last style applied to a layer still on the surface.
    pub fn role_of(&self, layer: LayerHandle) -> Option<StyleRole> {
        self.style_of(layer).map(|s| s.role)
    }

    pub fn was_removed(&self, layer: LayerHandle) -> bool {
        self.removed.contains(&layer)
    }

    /// Layers that have been styled and not removed.
    pub fn live_layers(&self) -> impl Iterator<Item = LayerHandle> + '_ {
        self.styles.keys().copied()
    }
}

impl DrawingSurface for HeadlessSurface {
    fn start_polygon(&mut self) {
        self.calls.push(SurfaceCall::StartPolygon);
    }

    fn start_rectangle(&mut self) {
        self.calls.push(SurfaceCall::StartRectangle);
    }

    fn stop_drawing(&mut self) {
        self.calls.push(SurfaceCall::StopDrawing);
    }

    fn remove_layer(&mut self, layer: LayerHandle) {
        self.calls.push(SurfaceCall::RemoveLayer(layer));
        self.styles.remove(&layer);
        self.removed.insert(layer);
    }

    fn set_style(&mut self, layer: LayerHandle, style: &LayerStyle) {
        self.calls.push(SurfaceCall::SetStyle(layer, style.role));
        self.styles.insert(layer, style.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StylePalette;

    #[test]
    fn test_records_calls_in_order() {
        let mut surface = HeadlessSurface::new();
        surface.start_polygon();
        surface.stop_drawing();
        surface.start_rectangle();

        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::StartPolygon,
                SurfaceCall::StopDrawing,
                SurfaceCall::StartRectangle
            ]
        );
    }

    #[test]
    fn test_tracks_styles_and_removals() {
        let mut surface = HeadlessSurface::new();
        let palette = StylePalette::default();

        surface.set_style(LayerHandle(1), &palette.style(StyleRole::Selected));
        surface.set_style(LayerHandle(1), &palette.style(StyleRole::Committed));
        surface.set_style(LayerHandle(2), &palette.style(StyleRole::Default));
        assert_eq!(surface.role_of(LayerHandle(1)), Some(StyleRole::Committed));

        surface.remove_layer(LayerHandle(2));
        assert!(surface.was_removed(LayerHandle(2)));
        assert!(surface.style_of(LayerHandle(2)).is_none());
        assert_eq!(surface.live_layers().collect::<Vec<_>>(), vec![LayerHandle(1)]);
    }
}
