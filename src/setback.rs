//! Boundary setback.
//!
//! The shrink is vertex-radial: each vertex moves toward the ring's vertex
//! centroid. It is not a true inward offset of the edges. Roughly convex,
//! roughly regular fields come out close to a uniform offset; concave
//! fields may shrink unevenly and can self-intersect.

use tracing::debug;

use crate::geodesy::{area_m2, centroid, heading_between, minimum_width_m, offset};
use crate::types::Polygon;

/// Rings smaller than this are treated as fully consumed.
pub const MIN_BUILDABLE_AREA_M2: f64 = 0.01;

pub fn shrink(polygon: &Polygon, setback_m: f64) -> Polygon {
    if setback_m <= 0.0 {
        return polygon.clone();
    }
    let Some(center) = centroid(polygon) else {
        return polygon.clone();
    };

    polygon
        .vertices
        .iter()
        .map(|&vertex| offset(vertex, setback_m, heading_between(vertex, center)))
        .collect::<Vec<_>>()
        .into()
}

/// Buildable ring after applying the setback, or `None` when nothing
/// usable remains.
pub fn buildable_area(polygon: &Polygon, setback_m: f64) -> Option<Polygon> {
    if polygon.len() < 3 {
        debug!(vertices = polygon.len(), "boundary has fewer than 3 vertices");
        return None;
    }

    let width = minimum_width_m(polygon);
    if setback_m > 0.0 && 2.0 * setback_m >= width {
        debug!(setback_m, width_m = width, "setback consumes the whole boundary");
        return None;
    }

    let shrunk = shrink(polygon, setback_m);
    let area = area_m2(&shrunk);
    if area < MIN_BUILDABLE_AREA_M2 {
        debug!(area_m2 = area, "buildable area collapsed");
        return None;
    }
    Some(shrunk)
}
