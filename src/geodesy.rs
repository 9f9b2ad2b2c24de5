//! Spherical-earth primitives used by the layout engine.
//!
//! Short displacements use an equirectangular approximation, which is
//! accurate to well under 0.1% for field-scale extents (up to a few km).
//! Nothing here is valid near the poles or across the antimeridian.

use geo::{
    Area, Contains, HaversineBearing, HaversineDistance, LineString, Point, Polygon as GeoPolygon,
};

use crate::angles::{deg_to_rad, normalize_angle};
use crate::types::{GeoPoint, Polygon};

pub const METERS_PER_DEGREE: f64 = 111_319.5;
/// Sphere radius consistent with [`METERS_PER_DEGREE`] (the WGS84
/// equatorial radius), so that `offset` and `distance_between` agree.
pub const EARTH_RADIUS_M: f64 = METERS_PER_DEGREE * 180.0 / std::f64::consts::PI;

/// Sphere radius `geo`'s haversine measures against.
const GEO_MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;

const MIN_EDGE_LENGTH_M: f64 = 1e-9;

pub fn meters_per_degree_longitude(latitude: f64) -> f64 {
    METERS_PER_DEGREE * deg_to_rad(latitude).cos()
}

/// `geo` point in (x, y) = (longitude, latitude) order.
pub fn to_geo_point(point: GeoPoint) -> Point<f64> {
    Point::new(point.longitude, point.latitude)
}

pub fn to_geo_polygon(polygon: &Polygon) -> GeoPolygon<f64> {
    let ring: Vec<(f64, f64)> = polygon
        .vertices
        .iter()
        .map(|p| (p.longitude, p.latitude))
        .collect();
    GeoPolygon::new(LineString::from(ring), vec![])
}

pub fn offset(point: GeoPoint, distance_m: f64, bearing_deg: f64) -> GeoPoint {
    let (sin_b, cos_b) = deg_to_rad(bearing_deg).sin_cos();
    offset_east_north(point, distance_m * sin_b, distance_m * cos_b)
}

pub fn offset_east_north(point: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint {
    GeoPoint {
        latitude: point.latitude + north_m / METERS_PER_DEGREE,
        longitude: point.longitude + east_m / meters_per_degree_longitude(point.latitude),
    }
}

/// Haversine great-circle distance in meters, on the sphere of
/// [`EARTH_RADIUS_M`].
pub fn distance_between(a: GeoPoint, b: GeoPoint) -> f64 {
    let on_mean_sphere = to_geo_point(a).haversine_distance(&to_geo_point(b));
    on_mean_sphere * (EARTH_RADIUS_M / GEO_MEAN_EARTH_RADIUS_M)
}

/// Initial great-circle bearing from `a` to `b` in [0, 360), 0 = North.
pub fn heading_between(a: GeoPoint, b: GeoPoint) -> f64 {
    normalize_angle(to_geo_point(a).haversine_bearing(to_geo_point(b)))
}

/// A ring prepared once for repeated containment queries.
///
/// Containment is planar in longitude/latitude. Points on the boundary are
/// outside.
#[derive(Debug, Clone)]
pub struct Boundary {
    ring: Option<GeoPolygon<f64>>,
}

impl Boundary {
    pub fn new(polygon: &Polygon) -> Self {
        Self {
            ring: (polygon.len() >= 3).then(|| to_geo_polygon(polygon)),
        }
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        self.ring
            .as_ref()
            .is_some_and(|ring| ring.contains(&to_geo_point(point)))
    }
}

pub fn contains_point(polygon: &Polygon, point: GeoPoint) -> bool {
    Boundary::new(polygon).contains(point)
}

/// Arithmetic mean of the vertices, or `None` for an empty ring.
pub fn centroid(polygon: &Polygon) -> Option<GeoPoint> {
    if polygon.is_empty() {
        return None;
    }
    let n = polygon.len() as f64;
    let (lat_sum, lng_sum) = polygon
        .vertices
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.latitude, lng + p.longitude));
    Some(GeoPoint::new(lat_sum / n, lng_sum / n))
}

/// Equirectangular tangent plane around a fixed origin.
///
/// Unlike [`offset`], the longitude scale is frozen at the origin's
/// latitude, so `to_local` and `from_local` are exact inverses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    origin: GeoPoint,
    meters_per_deg_lng: f64,
}

impl LocalFrame {
    pub fn new(origin: GeoPoint) -> Self {
        Self {
            origin,
            meters_per_deg_lng: meters_per_degree_longitude(origin.latitude),
        }
    }

    /// Meters east and north of the origin.
    pub fn to_local(&self, point: GeoPoint) -> (f64, f64) {
        (
            (point.longitude - self.origin.longitude) * self.meters_per_deg_lng,
            (point.latitude - self.origin.latitude) * METERS_PER_DEGREE,
        )
    }

    pub fn from_local(&self, east_m: f64, north_m: f64) -> GeoPoint {
        GeoPoint {
            latitude: self.origin.latitude + north_m / METERS_PER_DEGREE,
            longitude: self.origin.longitude + east_m / self.meters_per_deg_lng,
        }
    }

    pub fn project(&self, polygon: &Polygon) -> Vec<(f64, f64)> {
        polygon.vertices.iter().map(|p| self.to_local(*p)).collect()
    }

    pub fn project_polygon(&self, polygon: &Polygon) -> GeoPolygon<f64> {
        GeoPolygon::new(LineString::from(self.project(polygon)), vec![])
    }
}

/// Enclosed planar area in square meters. Zero for rings with fewer than
/// three vertices.
pub fn area_m2(polygon: &Polygon) -> f64 {
    match centroid(polygon) {
        Some(c) if polygon.len() >= 3 => LocalFrame::new(c).project_polygon(polygon).unsigned_area(),
        _ => 0.0,
    }
}

/// Smallest extent of the ring measured perpendicular to one of its edges.
///
/// For convex rings this is the minimum width (the narrowest strip the
/// ring fits in); for concave rings it is an upper bound on it.
pub fn minimum_width_m(polygon: &Polygon) -> f64 {
    let Some(c) = centroid(polygon) else {
        return 0.0;
    };
    if polygon.len() < 3 {
        return 0.0;
    }
    let points = LocalFrame::new(c).project(polygon);

    let mut min_width = f64::INFINITY;
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let len = dx.hypot(dy);
        if len < MIN_EDGE_LENGTH_M {
            continue;
        }
        let (nx, ny) = (-dy / len, dx / len);
        let (lo, hi) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            let d = p.0 * nx + p.1 * ny;
            (lo.min(d), hi.max(d))
        });
        min_width = min_width.min(hi - lo);
    }

    if min_width.is_finite() {
        min_width
    } else {
        0.0
    }
}
