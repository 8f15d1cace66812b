//! Session loop driving a [`SelectionWorkflow`] from a command queue.

use tokio::sync::mpsc;

use crate::geocode::{NameResolver, ReverseGeocoder};
use crate::surface::DrawingSurface;
use crate::workflow::{NameRequest, SelectionWorkflow};

use super::command::{SessionCommand, SessionHandle};

/// Owns a workflow and serializes every input to it.
///
/// Name lookups run as spawned tasks; their results come back as
/// [`SessionCommand::NameResolved`] on the same queue. The workflow drops
/// results for regions that are no longer selected.
pub struct Session<S, G> {
    workflow: SelectionWorkflow<S>,
    resolver: NameResolver<G>,
    tx: mpsc::UnboundedSender<SessionCommand>,
    rx: mpsc::UnboundedReceiver<SessionCommand>,
    in_flight: usize,
}

impl<S, G> Session<S, G>
where
    S: DrawingSurface,
    G: ReverseGeocoder + 'static,
{
    pub fn new(workflow: SelectionWorkflow<S>, resolver: NameResolver<G>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            workflow,
            resolver,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// A sender that feeds this session.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle::new(self.tx.clone())
    }

    pub fn workflow(&self) -> &SelectionWorkflow<S> {
        &self.workflow
    }

    pub fn into_workflow(self) -> SelectionWorkflow<S> {
        self.workflow
    }

    /// Number of name lookups whose result has not arrived yet.
    pub fn pending_lookups(&self) -> usize {
        self.in_flight
    }

    /// Apply one command. Returns false when the session should stop.
    pub fn dispatch(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Surface(event) => {
                if let Some(request) = self.workflow.handle_surface_event(event) {
                    self.spawn_lookup(request);
                }
            }
            SessionCommand::SelectLayer(layer) => {
                self.workflow.select_layer(layer);
            }
            SessionCommand::Confirm { name } => {
                self.workflow.confirm(name.as_deref());
            }
            SessionCommand::Cancel => {
                self.workflow.cancel();
            }
            SessionCommand::RemoveRegion(id) => {
                self.workflow.remove_region(&id);
            }
            SessionCommand::ClearCart => {
                self.workflow.clear_cart();
            }
            SessionCommand::StartPolygon => self.workflow.start_polygon(),
            SessionCommand::StartRectangle => self.workflow.start_rectangle(),
            SessionCommand::StopDrawing => self.workflow.stop_drawing(),
            SessionCommand::NameResolved { region_id, name } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.workflow.apply_resolved_name(region_id, &name);
            }
            SessionCommand::Shutdown => {
                tracing::debug!("Session shutdown requested");
                return false;
            }
        }
        true
    }

    /// Process queued commands until every outstanding lookup has answered.
    ///
    /// Returns false if a shutdown arrived meanwhile.
    pub async fn settle(&mut self) -> bool {
        while self.in_flight > 0 {
            let Some(command) = self.rx.recv().await else {
                return false;
            };
            if !self.dispatch(command) {
                return false;
            }
        }
        true
    }

    /// Run until [`SessionCommand::Shutdown`], then hand back the workflow.
    pub async fn run(mut self) -> SelectionWorkflow<S> {
        tracing::debug!("Session started");

        while let Some(command) = self.rx.recv().await {
            if !self.dispatch(command) {
                break;
            }
        }

        tracing::debug!(
            pending_lookups = self.in_flight,
            cart_len = self.workflow.store().len(),
            "Session stopped"
        );
        self.workflow
    }

    fn spawn_lookup(&mut self, request: NameRequest) {
        let resolver = self.resolver.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;

        tracing::debug!(
            region_id = %request.region_id,
            center = %request.center,
            "Resolving region name"
        );

        tokio::spawn(async move {
            let name = resolver.resolve(request.center).await;
            // Send fails only once the session is gone.
            let _ = tx.send(SessionCommand::NameResolved {
                region_id: request.region_id,
                name,
            });
        });
    }
}
