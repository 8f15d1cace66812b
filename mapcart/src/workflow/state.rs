//! Workflow state types.

use std::fmt;

use crate::geometry::LonLat;
use crate::region::RegionId;

/// Interaction state of the selection workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// Nothing selected.
    #[default]
    Idle,
    /// A shape was just drawn; its name is still the placeholder.
    Drafting,
    /// A draft is ready for the user to review, name, and confirm.
    Confirming,
    /// A committed region is open; edits stay on the selection until confirmed.
    Editing,
}

impl WorkflowState {
    /// Whether a region is pending confirmation or open for editing.
    pub fn has_selection(&self) -> bool {
        !matches!(self, WorkflowState::Idle)
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Drafting => write!(f, "Drafting"),
            Self::Confirming => write!(f, "Confirming"),
            Self::Editing => write!(f, "Editing"),
        }
    }
}

/// Request to resolve a display name for a freshly drawn region.
///
/// The answer must be handed back through
/// [`super::SelectionWorkflow::apply_resolved_name`] with the same
/// `region_id`; answers for a region that is no longer selected are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameRequest {
    pub region_id: RegionId,
    pub center: LonLat,
}
