#[macro_use]
mod common;

use common::{rectangle, square_field, FIELD_CENTER};
use solar_layout::geodesy::{area_m2, contains_point, distance_between, offset, LocalFrame};
use solar_layout::setback::*;
use solar_layout::Polygon;

// ── Shrink ──

#[test]
fn test_zero_setback_is_identity() {
    let field = square_field();
    assert_eq!(shrink(&field, 0.0), field);
    assert_eq!(shrink(&field, -3.0), field);
}

#[test]
fn test_shrink_preserves_vertex_count_and_order() {
    let field = rectangle(FIELD_CENTER, 180.0, 90.0);
    let shrunk = shrink(&field, 8.0);
    assert_eq!(shrunk.len(), field.len());
    for (before, after) in field.vertices.iter().zip(&shrunk.vertices) {
        assert_approx!(distance_between(*before, *after), 8.0, 0.01);
    }
}

#[test]
fn test_shrink_moves_inward() {
    let field = square_field();
    let shrunk = shrink(&field, 5.0);
    for v in &shrunk.vertices {
        assert!(contains_point(&field, *v));
    }
    assert!(area_m2(&shrunk) < area_m2(&field));
}

#[test]
fn test_square_shrinks_along_diagonals() {
    // Each corner moves 5 m toward the center, so each side loses 5·√2 m.
    let shrunk = shrink(&square_field(), 5.0);
    let side = 100.0 - 2.0 * 5.0 / 2.0_f64.sqrt();
    assert_approx!(area_m2(&shrunk), side * side, 1.0);
}

// ── Buildable area ──

#[test]
fn test_buildable_area_normal_setback() {
    let buildable = buildable_area(&square_field(), 5.0).expect("field should stay buildable");
    assert_eq!(buildable.len(), 4);
}

#[test]
fn test_buildable_area_without_setback_is_the_boundary() {
    let field = square_field();
    assert_eq!(buildable_area(&field, 0.0), Some(field));
}

#[test]
fn test_setback_beyond_half_width_collapses() {
    assert!(buildable_area(&square_field(), 60.0).is_none());
    assert!(buildable_area(&square_field(), 50.0).is_none());
    assert!(buildable_area(&rectangle(FIELD_CENTER, 400.0, 30.0), 16.0).is_none());
}

#[test]
fn test_setback_just_under_half_width_survives() {
    assert!(buildable_area(&square_field(), 49.0).is_some());
}

#[test]
fn test_too_few_vertices_collapse() {
    let two = Polygon::new(vec![FIELD_CENTER, offset(FIELD_CENTER, 30.0, 90.0)]);
    assert!(buildable_area(&two, 0.0).is_none());
    assert!(buildable_area(&Polygon::default(), 1.0).is_none());
}

#[test]
fn test_collinear_ring_collapses() {
    let frame = LocalFrame::new(FIELD_CENTER);
    let line = Polygon::new(vec![
        frame.from_local(-20.0, 0.0),
        frame.from_local(0.0, 0.0),
        frame.from_local(20.0, 0.0),
    ]);
    assert!(buildable_area(&line, 0.0).is_none());
}
