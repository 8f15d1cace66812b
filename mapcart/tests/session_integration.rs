//! Integration tests for the session loop.
//!
//! These tests drive a full session from JSON surface payloads through to the
//! cart, covering:
//! - Name lookup success and coordinate fallback
//! - Stale lookups for regions that lost the selection
//! - Cart notifications observed by a subscriber
//! - Configuration flowing into the workflow's collaborators

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mapcart::cart::{CartEvent, CartStore};
use mapcart::config::ConfigFile;
use mapcart::geocode::{GeocodeError, NameResolver, OfflineGeocoder, ReverseGeocoder};
use mapcart::session::{Session, SessionCommand};
use mapcart::style::StyleRole;
use mapcart::surface::{parse_event, HeadlessSurface, LayerHandle, SurfaceCall};
use mapcart::workflow::{SelectionWorkflow, WorkflowState};

// =============================================================================
// Test Helpers
// =============================================================================

/// Names places after the hemisphere quadrant and counts lookups.
#[derive(Clone, Default)]
struct QuadrantGeocoder {
    calls: Arc<AtomicUsize>,
}

impl ReverseGeocoder for QuadrantGeocoder {
    async fn reverse_lookup(&self, lat: f64, lon: f64) -> Result<String, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if lat == 0.0 && lon == 0.0 {
            return Err(GeocodeError::NotFound { lat, lon });
        }
        let ns = if lat >= 0.0 { "North" } else { "South" };
        let ew = if lon >= 0.0 { "East" } else { "West" };
        Ok(format!("{}-{}", ns, ew))
    }
}

fn created(layer: u64, coordinates: &str) -> SessionCommand {
    let json = format!(
        r#"{{"type":"shape-created","layer":{},"geometry":{{"type":"Polygon","coordinates":{}}}}}"#,
        layer, coordinates
    );
    SessionCommand::Surface(parse_event(&json).unwrap())
}

fn edited(layer: u64, coordinates: &str) -> SessionCommand {
    let json = format!(
        r#"{{"type":"shape-edited","layer":{},"geometry":{{"type":"Polygon","coordinates":{}}}}}"#,
        layer, coordinates
    );
    SessionCommand::Surface(parse_event(&json).unwrap())
}

const NORTH_EAST: &str = "[[[10,10],[10,12],[12,12],[12,10],[10,10]]]";
const SOUTH_WEST: &str = "[[[-12,-12],[-12,-10],[-10,-10],[-10,-12],[-12,-12]]]";
const AROUND_ORIGIN: &str = "[[[-1,-1],[-1,1],[1,1],[1,-1],[-1,-1]]]";

fn session<G: ReverseGeocoder + 'static>(geocoder: G) -> Session<HeadlessSurface, G> {
    Session::new(
        SelectionWorkflow::new(HeadlessSurface::new()),
        NameResolver::new(geocoder, Duration::from_secs(5)),
    )
}

// =============================================================================
// Integration Tests
// =============================================================================

#[tokio::test]
async fn test_draw_resolve_confirm() {
    let geocoder = QuadrantGeocoder::default();
    let calls = Arc::clone(&geocoder.calls);
    let mut session = session(geocoder);

    session.dispatch(created(1, NORTH_EAST));
    session.settle().await;
    assert_eq!(session.workflow().state(), WorkflowState::Confirming);
    session.dispatch(SessionCommand::Confirm { name: None });

    let store = session.workflow().store();
    assert_eq!(store.len(), 1);
    assert_eq!(store.regions()[0].name(), "North-East");
    assert_eq!(store.regions()[0].center().lon, 11.0);
    assert!(store.selected_region().is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_not_found_uses_coordinates() {
    let mut session = session(QuadrantGeocoder::default());

    session.dispatch(created(1, AROUND_ORIGIN));
    session.settle().await;

    let selected = session.workflow().store().selected_region().unwrap();
    assert_eq!(selected.name(), "0.000, 0.000");
}

#[tokio::test]
async fn test_offline_session_names_by_coordinates() {
    let mut session = session(OfflineGeocoder);

    session.dispatch(created(1, SOUTH_WEST));
    session.settle().await;
    session.dispatch(SessionCommand::Confirm { name: None });

    assert_eq!(
        session.workflow().store().regions()[0].name(),
        "-11.000, -11.000"
    );
}

#[tokio::test]
async fn test_two_regions_newest_first() {
    let mut session = session(QuadrantGeocoder::default());

    session.dispatch(created(1, NORTH_EAST));
    session.settle().await;
    session.dispatch(SessionCommand::Confirm { name: None });
    session.dispatch(created(2, SOUTH_WEST));
    session.settle().await;
    session.dispatch(SessionCommand::Confirm { name: None });

    let names: Vec<&str> = session
        .workflow()
        .store()
        .regions()
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(names, vec!["South-West", "North-East"]);
}

#[tokio::test]
async fn test_superseded_lookup_is_discarded() {
    let mut session = session(QuadrantGeocoder::default());

    session.dispatch(created(1, NORTH_EAST));
    session.dispatch(created(2, SOUTH_WEST));
    session.settle().await;

    let workflow = session.workflow();
    let selected = workflow.store().selected_region().unwrap();
    assert_eq!(selected.name(), "South-West");
    assert_eq!(workflow.surface().role_of(LayerHandle(1)), Some(StyleRole::Default));
    assert_eq!(workflow.surface().role_of(LayerHandle(2)), Some(StyleRole::Selected));
}

#[tokio::test]
async fn test_edit_committed_region_and_reconfirm() {
    let mut session = session(QuadrantGeocoder::default());

    session.dispatch(created(1, NORTH_EAST));
    session.settle().await;
    session.dispatch(SessionCommand::Confirm { name: Some("Field".to_string()) });

    session.dispatch(SessionCommand::SelectLayer(LayerHandle(1)));
    assert_eq!(session.workflow().state(), WorkflowState::Editing);
    session.dispatch(edited(1, SOUTH_WEST));
    session.dispatch(SessionCommand::Confirm { name: None });

    let store = session.workflow().store();
    assert_eq!(store.len(), 1);
    assert_eq!(store.regions()[0].name(), "Field");
    assert_eq!(store.regions()[0].center().lat, -11.0);
}

#[tokio::test]
async fn test_cart_events_observed_in_order() {
    let mut session = session(QuadrantGeocoder::default());
    let mut events = session.workflow().store().subscribe();

    session.dispatch(created(1, NORTH_EAST));
    session.settle().await;
    session.dispatch(SessionCommand::Confirm { name: None });
    let id = session.workflow().store().regions()[0].id();
    session.dispatch(SessionCommand::RemoveRegion(id));

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        if !matches!(event, CartEvent::SelectionChanged(_)) {
            seen.push(event);
        }
    }
    assert_eq!(
        seen,
        vec![CartEvent::RegionAdded(id), CartEvent::RegionRemoved(id)]
    );
    assert!(session.workflow().surface().was_removed(LayerHandle(1)));
}

#[tokio::test]
async fn test_clear_cart_through_session() {
    let mut session = session(QuadrantGeocoder::default());

    for (layer, coords) in [(1, NORTH_EAST), (2, SOUTH_WEST)] {
        session.dispatch(created(layer, coords));
        session.settle().await;
        session.dispatch(SessionCommand::Confirm { name: None });
    }
    session.dispatch(SessionCommand::ClearCart);

    let workflow = session.workflow();
    assert!(workflow.store().is_empty());
    assert!(workflow.surface().was_removed(LayerHandle(1)));
    assert!(workflow.surface().was_removed(LayerHandle(2)));
}

#[tokio::test]
async fn test_configured_workflow() {
    let mut config = ConfigFile::default();
    config.naming.placeholder_prefix = "Plot".to_string();
    config.style.committed_color = "#123456".to_string();

    let workflow = SelectionWorkflow::with_parts(
        CartStore::new(),
        HeadlessSurface::new(),
        config.style_palette(),
        config.placeholder_namer(),
    );
    let mut session = Session::new(
        workflow,
        NameResolver::from_config(OfflineGeocoder, &config.geocoder_config()),
    );

    session.dispatch(SessionCommand::StartRectangle);
    session.dispatch(created(4, NORTH_EAST));
    let placeholder = session
        .workflow()
        .store()
        .selected_region()
        .unwrap()
        .name()
        .to_string();
    assert!(placeholder.starts_with("Plot "));

    session.settle().await;
    session.dispatch(SessionCommand::Confirm { name: None });

    let surface = session.workflow().surface();
    assert_eq!(surface.calls()[0], SurfaceCall::StartRectangle);
    assert_eq!(surface.style_of(LayerHandle(4)).unwrap().color, "#123456");
}
