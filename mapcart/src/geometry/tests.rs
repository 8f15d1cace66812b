//! Tests for center computation

use super::*;

fn assert_close(actual: LonLat, lon: f64, lat: f64) {
    assert!(
        (actual.lon - lon).abs() < 1e-9 && (actual.lat - lat).abs() < 1e-9,
        "expected ({}, {}), got {}",
        lon,
        lat,
        actual
    );
}

#[test]
fn test_square_open_ring() {
    let square = Geometry::Polygon(vec![vec![[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]]);
    assert_close(compute_center(&square), 1.0, 1.0);
}

#[test]
fn test_square_closed_ring() {
    let square = Geometry::Polygon(vec![vec![
        [0.0, 0.0],
        [0.0, 2.0],
        [2.0, 2.0],
        [2.0, 0.0],
        [0.0, 0.0],
    ]]);
    assert_close(compute_center(&square), 1.0, 1.0);
}

#[test]
fn test_vertex_mean_is_not_area_centroid() {
    // Three vertices bunched at one end pull the mean towards them
    let shape = Geometry::Polygon(vec![vec![
        [0.0, 0.0],
        [0.0, 1.0],
        [0.1, 1.0],
        [0.1, 0.0],
        [10.0, 0.5],
    ]]);
    assert_close(compute_center(&shape), 2.04, 0.5);
}

#[test]
fn test_holes_are_ignored() {
    let with_hole = Geometry::Polygon(vec![
        vec![[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0], [0.0, 0.0]],
        vec![[3.0, 3.0], [3.0, 3.5], [3.5, 3.5], [3.0, 3.0]],
    ]);
    assert_close(compute_center(&with_hole), 2.0, 2.0);
}

#[test]
fn test_multipolygon_uses_first_ring_of_first_polygon() {
    let multi = Geometry::MultiPolygon(vec![
        vec![vec![[10.0, 10.0], [10.0, 12.0], [12.0, 12.0], [12.0, 10.0]]],
        vec![vec![[-50.0, -50.0], [-50.0, -40.0], [-40.0, -40.0]]],
    ]);
    assert_close(compute_center(&multi), 11.0, 11.0);
}

#[test]
fn test_point_returned_unchanged() {
    let point = Geometry::Point([8.6753, 9.082]);
    let center = compute_center(&point);
    assert_eq!(center.lon, 8.6753);
    assert_eq!(center.lat, 9.082);
}

#[test]
fn test_unsupported_geometry_falls_back_to_origin() {
    let line = Geometry::Unsupported("LineString".to_string());
    assert_eq!(compute_center(&line), LonLat::ORIGIN);
}

#[test]
fn test_empty_geometry_falls_back_to_origin() {
    assert_eq!(compute_center(&Geometry::Empty), LonLat::ORIGIN);
}

#[test]
fn test_degenerate_polygons_fall_back_to_origin() {
    assert_eq!(compute_center(&Geometry::Polygon(vec![])), LonLat::ORIGIN);
    assert_eq!(
        compute_center(&Geometry::Polygon(vec![vec![]])),
        LonLat::ORIGIN
    );
    assert_eq!(
        compute_center(&Geometry::MultiPolygon(vec![])),
        LonLat::ORIGIN
    );
    assert_eq!(
        compute_center(&Geometry::MultiPolygon(vec![vec![]])),
        LonLat::ORIGIN
    );
}

#[test]
fn test_single_vertex_ring() {
    let single = Geometry::Polygon(vec![vec![[3.0, 4.0]]]);
    assert_close(compute_center(&single), 3.0, 4.0);
}

#[test]
fn test_deterministic_on_repeated_calls() {
    let shape = Geometry::Polygon(vec![vec![[7.3, 9.0], [7.5, 9.2], [7.6, 8.9]]]);
    let first = compute_center(&shape);
    for _ in 0..10 {
        assert_eq!(compute_center(&shape), first);
    }
}

#[test]
fn test_rectangle_center() {
    let rect = Geometry::rectangle([4.0, 6.0], [2.0, 2.0]);
    assert_close(compute_center(&rect), 3.0, 4.0);
}

#[test]
fn test_rectangle_is_closed_ring() {
    match Geometry::rectangle([0.0, 0.0], [1.0, 1.0]) {
        Geometry::Polygon(rings) => {
            let ring = &rings[0];
            assert_eq!(ring.len(), 5);
            assert_eq!(ring.first(), ring.last());
        }
        other => panic!("Expected polygon, got {:?}", other),
    }
}

#[test]
fn test_kind_names() {
    assert_eq!(Geometry::Point([0.0, 0.0]).kind(), "Point");
    assert_eq!(Geometry::Polygon(vec![]).kind(), "Polygon");
    assert_eq!(Geometry::MultiPolygon(vec![]).kind(), "MultiPolygon");
    assert_eq!(Geometry::Unsupported("LineString".into()).kind(), "LineString");
    assert_eq!(Geometry::Empty.kind(), "Empty");
}
