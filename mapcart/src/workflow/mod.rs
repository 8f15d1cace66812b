//! Selection / confirmation workflow.
//!
//! The interaction state machine layered over the [`crate::cart`] store:
//!
//! ```text
//!            ShapeCreated                 name resolved
//!   Idle ─────────────────► Drafting ───────────────────► Confirming
//!    ▲  ▲                      │                              │
//!    │  │     Confirm / Cancel │                              │
//!    │  └──────────────────────┴──────────────────────────────┘
//!    │
//!    │  Confirm / Cancel      SelectLayer (committed)
//!    └───────────────── Editing ◄──────────────── Idle
//! ```
//!
//! `ShapeEdited` never changes state; it refreshes the selection's geometry
//! and center. Selecting another shape while one is pending first deselects
//! the pending one and restores its style from cart membership.
//!
//! Confirming a region that is already in the cart updates it in place.

mod machine;
mod state;

pub use machine::SelectionWorkflow;
pub use state::{NameRequest, WorkflowState};
