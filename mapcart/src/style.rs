//! Layer styling as a projection of cart membership.
//!
//! A layer's style is never read back to decide anything. It is recomputed
//! from two facts the core owns: whether the region is committed to the cart,
//! and whether it is the current selection.

use serde::{Deserialize, Serialize};

/// Default stroke color for shapes that are not in the cart.
pub const DEFAULT_COLOR: &str = "#3388ff";

/// Stroke color for committed shapes.
pub const DEFAULT_COMMITTED_COLOR: &str = "#2e7d32";

/// Stroke color for the selected shape.
pub const DEFAULT_SELECTED_COLOR: &str = "#ff9800";

/// Default stroke weight in pixels.
pub const DEFAULT_WEIGHT: u8 = 3;

/// Which of the three looks a layer should have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleRole {
    /// Drawn but not in the cart.
    Default,
    /// In the cart.
    Committed,
    /// Pending confirmation or open for editing.
    Selected,
}

impl StyleRole {
    /// Selection wins over membership; membership wins over nothing.
    pub fn for_region(in_cart: bool, selected: bool) -> Self {
        match (selected, in_cart) {
            (true, _) => StyleRole::Selected,
            (false, true) => StyleRole::Committed,
            (false, false) => StyleRole::Default,
        }
    }
}

/// Concrete style applied to a layer on the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub role: StyleRole,
    pub color: String,
    pub weight: u8,
    pub dashed: bool,
}

/// Colors and weight used to render each [`StyleRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePalette {
    pub default_color: String,
    pub committed_color: String,
    pub selected_color: String,
    pub weight: u8,
}

impl StylePalette {
    /// Style for a region given its cart membership and selection status.
    pub fn style_for(&self, in_cart: bool, selected: bool) -> LayerStyle {
        self.style(StyleRole::for_region(in_cart, selected))
    }

    /// Style for a role.
    pub fn style(&self, role: StyleRole) -> LayerStyle {
        let color = match role {
            StyleRole::Default => &self.default_color,
            StyleRole::Committed => &self.committed_color,
            StyleRole::Selected => &self.selected_color,
        };
        LayerStyle {
            role,
            color: color.clone(),
            weight: self.weight,
            // Selected outlines are dashed so they read as "not final yet"
            dashed: role == StyleRole::Selected,
        }
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            committed_color: DEFAULT_COMMITTED_COLOR.to_string(),
            selected_color: DEFAULT_SELECTED_COLOR.to_string(),
            weight: DEFAULT_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table() {
        assert_eq!(StyleRole::for_region(false, false), StyleRole::Default);
        assert_eq!(StyleRole::for_region(true, false), StyleRole::Committed);
        assert_eq!(StyleRole::for_region(false, true), StyleRole::Selected);
        assert_eq!(StyleRole::for_region(true, true), StyleRole::Selected);
    }

    #[test]
    fn test_palette_colors() {
        let palette = StylePalette::default();
        assert_eq!(palette.style_for(false, false).color, DEFAULT_COLOR);
        assert_eq!(palette.style_for(true, false).color, DEFAULT_COMMITTED_COLOR);
        assert_eq!(palette.style_for(true, true).color, DEFAULT_SELECTED_COLOR);
    }

    #[test]
    fn test_only_selected_is_dashed() {
        let palette = StylePalette::default();
        assert!(palette.style(StyleRole::Selected).dashed);
        assert!(!palette.style(StyleRole::Committed).dashed);
        assert!(!palette.style(StyleRole::Default).dashed);
    }

    #[test]
    fn test_custom_weight() {
        let palette = StylePalette {
            weight: 7,
            ..Default::default()
        };
        assert_eq!(palette.style(StyleRole::Default).weight, 7);
    }
}
