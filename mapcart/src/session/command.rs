//! Commands accepted by a running session.

use thiserror::Error;
use tokio::sync::mpsc;

use crate::region::RegionId;
use crate::surface::{LayerHandle, SurfaceEvent};

/// One input to the session loop.
///
/// Surface events, user actions and completed name lookups all travel
/// through the same queue, so the workflow only ever sees one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// A validated event from the drawing surface.
    Surface(SurfaceEvent),
    /// The user clicked a layer.
    SelectLayer(LayerHandle),
    /// Commit the selection, optionally renaming it.
    Confirm { name: Option<String> },
    /// Drop the selection.
    Cancel,
    /// Remove a committed region from the cart.
    RemoveRegion(RegionId),
    /// Empty the cart.
    ClearCart,
    StartPolygon,
    StartRectangle,
    StopDrawing,
    /// A name lookup finished.
    NameResolved { region_id: RegionId, name: String },
    /// Stop the session loop.
    Shutdown,
}

/// The session is no longer receiving commands.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Session closed")]
pub struct SessionClosed;

/// Cloneable sender half of a session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command for the session.
    pub fn send(&self, command: SessionCommand) -> Result<(), SessionClosed> {
        self.tx.send(command).map_err(|_| SessionClosed)
    }

    pub fn surface_event(&self, event: SurfaceEvent) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Surface(event))
    }

    pub fn select_layer(&self, layer: LayerHandle) -> Result<(), SessionClosed> {
        self.send(SessionCommand::SelectLayer(layer))
    }

    pub fn confirm(&self, name: Option<String>) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Confirm { name })
    }

    pub fn cancel(&self) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Cancel)
    }

    pub fn shutdown(&self) -> Result<(), SessionClosed> {
        self.send(SessionCommand::Shutdown)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
