//! Replay a recorded interaction against a headless surface.
//!
//! A replay file is a JSON array of steps. Surface events use the same
//! payloads the drawing widget emits; the other steps are user actions:
//!
//! ```json
//! [
//!   {"action": "start-polygon"},
//!   {"action": "surface", "event": {"type": "shape-created", "layer": 1,
//!     "geometry": {"type": "Polygon", "coordinates": [[[0,0],[0,2],[2,2],[2,0],[0,0]]]}}},
//!   {"action": "confirm", "name": "Field"}
//! ]
//! ```
//!
//! Outstanding name lookups are awaited after every step, so a replay always
//! produces the same cart for the same geocoder answers.

use std::path::Path;

use mapcart::geocode::{NameResolver, ReverseGeocoder};
use mapcart::region::Region;
use mapcart::session::{Session, SessionCommand};
use mapcart::surface::{translate, HeadlessSurface, LayerHandle, RawSurfaceEvent};
use mapcart::workflow::SelectionWorkflow;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CliError;
use crate::runner::CliRunner;

/// One recorded step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ReplayStep {
    StartPolygon,
    StartRectangle,
    StopDrawing,
    /// A raw event from the drawing widget.
    Surface { event: RawSurfaceEvent },
    Select { layer: LayerHandle },
    Confirm {
        #[serde(default)]
        name: Option<String>,
    },
    Cancel,
    /// Remove the committed region drawn on `layer`.
    Remove { layer: LayerHandle },
    Clear,
}

/// Final state printed with `--json`.
#[derive(Debug, Serialize)]
struct ReplaySummary<'a> {
    state: String,
    regions: &'a [Region],
    selected: Option<&'a Region>,
    surface_calls: usize,
}

/// Parse a replay file's contents.
pub fn parse_steps(path: &str, content: &str) -> Result<Vec<ReplayStep>, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::InvalidInput {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Run the `replay` command.
pub fn run(path: &Path, offline: bool, json: bool, verbose: bool) -> Result<(), CliError> {
    let display_path = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|error| CliError::FileRead {
        path: display_path.clone(),
        error,
    })?;
    let steps = parse_steps(&display_path, &content)?;

    let runner = CliRunner::new(verbose)?;
    runner.log_startup("replay");
    info!(path = %display_path, steps = steps.len(), offline, "Replaying session");

    let resolver = runner.resolver(offline)?;
    let workflow = runner.headless_workflow();
    let runtime = runner.runtime()?;
    let workflow = runtime.block_on(replay(&display_path, steps, workflow, resolver))?;

    if json {
        print_json(&workflow)
    } else {
        print_table(&workflow);
        Ok(())
    }
}

/// Drive `steps` through a session and return the resulting workflow.
pub async fn replay<G>(
    path: &str,
    steps: Vec<ReplayStep>,
    workflow: SelectionWorkflow<HeadlessSurface>,
    resolver: NameResolver<G>,
) -> Result<SelectionWorkflow<HeadlessSurface>, CliError>
where
    G: ReverseGeocoder + 'static,
{
    let mut session = Session::new(workflow, resolver);

    for (index, step) in steps.into_iter().enumerate() {
        debug!(step = index, ?step, "Replay step");

        let command = match step {
            ReplayStep::StartPolygon => SessionCommand::StartPolygon,
            ReplayStep::StartRectangle => SessionCommand::StartRectangle,
            ReplayStep::StopDrawing => SessionCommand::StopDrawing,
            ReplayStep::Surface { event } => {
                let event = translate(event).map_err(|e| CliError::InvalidInput {
                    path: path.to_string(),
                    reason: format!("step {}: {}", index, e),
                })?;
                SessionCommand::Surface(event)
            }
            ReplayStep::Select { layer } => SessionCommand::SelectLayer(layer),
            ReplayStep::Confirm { name } => SessionCommand::Confirm { name },
            ReplayStep::Cancel => SessionCommand::Cancel,
            ReplayStep::Remove { layer } => match session.workflow().region_for_layer(layer) {
                Some(id) => SessionCommand::RemoveRegion(id),
                None => {
                    debug!(step = index, %layer, "Remove on unknown layer skipped");
                    continue;
                }
            },
            ReplayStep::Clear => SessionCommand::ClearCart,
        };

        session.dispatch(command);
        session.settle().await;
    }

    Ok(session.into_workflow())
}

fn print_table(workflow: &SelectionWorkflow<HeadlessSurface>) {
    let store = workflow.store();

    println!("Cart ({} regions)", store.len());
    println!("================");
    for region in store.regions() {
        let layer = workflow
            .layer_of(&region.id())
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<32} {:<14} {:<10} center {}",
            region.name(),
            layer,
            region.geometry().kind(),
            region.center()
        );
    }

    println!();
    match store.selected_region() {
        Some(region) => println!("Selected: {} ({})", region.name(), workflow.state()),
        None => println!("Selected: none"),
    }
    println!("Surface calls: {}", workflow.surface().calls().len());
}

fn print_json(workflow: &SelectionWorkflow<HeadlessSurface>) -> Result<(), CliError> {
    let summary = ReplaySummary {
        state: workflow.state().to_string(),
        regions: workflow.store().regions(),
        selected: workflow.store().selected_region(),
        surface_calls: workflow.surface().calls().len(),
    };
    let text = serde_json::to_string_pretty(&summary).map_err(|e| CliError::InvalidInput {
        path: "-".to_string(),
        reason: format!("failed to serialize summary: {}", e),
    })?;
    println!("{}", text);
    Ok(())
}
