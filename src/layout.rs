//! Row-sweep table placement.
//!
//! The boundary and the buildable ring are projected onto one local plane,
//! centered on the boundary, and rotated into sweep axes: `v` runs along
//! the facing azimuth (rows are stacked along it) and `u` runs 90°
//! clockwise from it (tables within a row follow it). Candidate tables sit
//! on a fixed lattice whose phase comes from the boundary's (u, v) box and
//! the configured alignment. The setback only decides which lattice
//! positions are tried, never where they sit. A candidate is placed only if
//! its center and all four corners lie inside the buildable ring, and only
//! while the capacity cap allows a whole table more.

use geo::{BoundingRect, MultiPoint, Rect};
use tracing::{debug, info, warn};

use crate::aggregate::{capacity_kw, LayoutAccumulator};
use crate::angles::{rotate_from_east_north, rotate_to_east_north};
use crate::error::Result;
use crate::geodesy::{centroid, Boundary, LocalFrame};
use crate::metrics::row_pitch;
use crate::setback::buildable_area;
use crate::table::{table_id, TableGeometry};
use crate::types::{
    GeoPoint, HorizontalAlign, LayoutConfig, LayoutResult, ModuleSpec, Polygon, Table, VerticalAlign,
};
use crate::validation::validate;

/// Inset of the sweep boxes from each side. Keeps corners off boundary
/// edges, where containment is ambiguous.
pub const EDGE_CLEARANCE_M: f64 = 0.01;

/// Most candidate positions a single sweep visits.
pub const MAX_SWEEP_CANDIDATES: u64 = 5_000_000;

const SWEEP_EPSILON: f64 = 1e-9;

pub fn compute_layout(polygon: &Polygon, module: &ModuleSpec, config: &LayoutConfig) -> Result<LayoutResult> {
    validate(module, config)?;

    let Some(buildable) = buildable_area(polygon, config.setback_m) else {
        info!(setback_m = config.setback_m, "no buildable area, returning empty layout");
        return Ok(LayoutResult::empty());
    };

    let geometry = TableGeometry::new(module, config);
    let pitch = row_pitch(module, config);
    debug!(
        width_m = geometry.footprint.width_m,
        height_m = geometry.footprint.height_m,
        ground_depth_m = geometry.footprint.ground_depth_m,
        panels = geometry.panels_per_table(),
        "table footprint"
    );

    let Some(grid) = SweepGrid::new(polygon, &buildable, &geometry, pitch, config) else {
        return Ok(LayoutResult::empty());
    };
    debug!(
        row_pitch_m = grid.row_pitch,
        col_pitch_m = grid.col_pitch,
        rows = grid.rows,
        cols = grid.cols,
        "sweep grid"
    );

    let boundary = Boundary::new(&buildable);
    let per_table = geometry.panels_per_table() as u64;
    let mut acc = LayoutAccumulator::new();

    'rows: for row in 0..grid.rows {
        for col in 0..grid.cols {
            let center = grid.table_center(row, col);
            if !boundary.contains(center) {
                continue;
            }
            let corners = geometry.corners(center);
            if !corners.iter().all(|&p| boundary.contains(p)) {
                continue;
            }

            if let Some(cap) = config.max_capacity_kw {
                if capacity_kw(acc.panel_count() + per_table, module.power_watts) > cap {
                    info!(max_capacity_kw = cap, tables = acc.table_count(), "capacity limit reached");
                    break 'rows;
                }
            }

            acc.push(Table {
                id: table_id(row, col),
                panels: geometry.panels(center, row, col),
                center,
                corners,
                row_index: row,
                column_index: col,
            });
        }
    }

    let result = acc.finish(module.power_watts);
    info!(
        tables = result.tables.len(),
        panels = result.total_panel_count,
        capacity_kw = result.total_capacity_kw,
        rows = result.row_count,
        "layout complete"
    );
    Ok(result)
}

/// Number of items of `size` at `pitch` that fit in `span`.
fn fit_count(span: f64, size: f64, pitch: f64) -> u64 {
    if span + SWEEP_EPSILON < size || pitch <= 0.0 {
        return 0;
    }
    ((span - size) / pitch + SWEEP_EPSILON).floor() as u64 + 1
}

/// Unused extent once `count` items are packed from the start of `span`.
fn slack(span: f64, count: u64, size: f64, pitch: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (span - ((count - 1) as f64 * pitch + size)).max(0.0)
}

fn horizontal_shift(align: HorizontalAlign, slack: f64) -> f64 {
    match align {
        HorizontalAlign::Left => 0.0,
        HorizontalAlign::Center => slack / 2.0,
        HorizontalAlign::Right => slack,
    }
}

fn vertical_shift(align: VerticalAlign, slack: f64) -> f64 {
    match align {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Middle => slack / 2.0,
        VerticalAlign::Bottom => slack,
    }
}

/// Consecutive lattice lines along one sweep axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LatticeSpan {
    first: i64,
    count: u64,
}

impl LatticeSpan {
    const EMPTY: Self = Self { first: 0, count: 0 };
}

/// Lattice indices `k` whose item `[origin + k·pitch, origin + k·pitch + size]`
/// lies within `[lo, hi]`.
fn lattice_span(lo: f64, hi: f64, origin: f64, size: f64, pitch: f64) -> LatticeSpan {
    if pitch <= 0.0 || hi - lo + SWEEP_EPSILON < size {
        return LatticeSpan::EMPTY;
    }
    let first = ((lo - origin) / pitch - SWEEP_EPSILON).ceil();
    let last = ((hi - size - origin) / pitch + SWEEP_EPSILON).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return LatticeSpan::EMPTY;
    }
    LatticeSpan {
        first: first as i64,
        count: (last - first) as u64 + 1,
    }
}

/// Caps `rows × cols` at [`MAX_SWEEP_CANDIDATES`], dropping trailing rows.
fn limit_candidates(rows: &mut LatticeSpan, cols: &mut LatticeSpan) {
    if rows.count == 0 || cols.count == 0 {
        *rows = LatticeSpan::EMPTY;
        *cols = LatticeSpan::EMPTY;
        return;
    }
    if rows.count.saturating_mul(cols.count) <= MAX_SWEEP_CANDIDATES {
        return;
    }
    warn!(
        rows = rows.count,
        cols = cols.count,
        limit = MAX_SWEEP_CANDIDATES,
        "sweep grid exceeds candidate limit, truncating"
    );
    cols.count = cols.count.min(MAX_SWEEP_CANDIDATES);
    rows.count = MAX_SWEEP_CANDIDATES / cols.count;
}

/// Axis-aligned (u, v) box of `polygon` in sweep axes.
fn sweep_bounds(frame: &LocalFrame, polygon: &Polygon, azimuth_deg: f64) -> Option<Rect<f64>> {
    let rotated: MultiPoint<f64> = frame
        .project(polygon)
        .into_iter()
        .map(|(east, north)| rotate_from_east_north(east, north, azimuth_deg))
        .collect();
    rotated.bounding_rect()
}

struct SweepGrid {
    frame: LocalFrame,
    azimuth_deg: f64,
    u0: f64,
    v0: f64,
    half_width: f64,
    half_depth: f64,
    col_pitch: f64,
    row_pitch: f64,
    first_row: i64,
    first_col: i64,
    rows: u32,
    cols: u32,
}

impl SweepGrid {
    fn new(
        boundary: &Polygon,
        buildable: &Polygon,
        geometry: &TableGeometry,
        row_pitch: f64,
        config: &LayoutConfig,
    ) -> Option<Self> {
        let frame = LocalFrame::new(centroid(boundary)?);
        let azimuth_deg = config.azimuth_deg;
        let outer = sweep_bounds(&frame, boundary, azimuth_deg)?;
        let inner = sweep_bounds(&frame, buildable, azimuth_deg)?;

        let width = geometry.footprint.width_m;
        let depth = geometry.footprint.ground_depth_m;
        let col_pitch = width + config.frame_spacing_m;

        // Lattice phase: boundary box and alignment only.
        let u_span = outer.width() - 2.0 * EDGE_CLEARANCE_M;
        let v_span = outer.height() - 2.0 * EDGE_CLEARANCE_M;
        if u_span <= 0.0 || v_span <= 0.0 {
            return None;
        }
        let u_slack = slack(u_span, fit_count(u_span, width, col_pitch), width, col_pitch);
        let v_slack = slack(v_span, fit_count(v_span, depth, row_pitch), depth, row_pitch);
        let u0 = outer.min().x + EDGE_CLEARANCE_M + horizontal_shift(config.horizontal_align, u_slack);
        let v0 = outer.min().y + EDGE_CLEARANCE_M + vertical_shift(config.vertical_align, v_slack);

        let mut cols = lattice_span(
            inner.min().x + EDGE_CLEARANCE_M,
            inner.max().x - EDGE_CLEARANCE_M,
            u0,
            width,
            col_pitch,
        );
        let mut rows = lattice_span(
            inner.min().y + EDGE_CLEARANCE_M,
            inner.max().y - EDGE_CLEARANCE_M,
            v0,
            depth,
            row_pitch,
        );
        limit_candidates(&mut rows, &mut cols);

        Some(Self {
            frame,
            azimuth_deg,
            u0,
            v0,
            half_width: width / 2.0,
            half_depth: depth / 2.0,
            col_pitch,
            row_pitch,
            first_row: rows.first,
            first_col: cols.first,
            rows: rows.count as u32,
            cols: cols.count as u32,
        })
    }

    fn table_center(&self, row: u32, col: u32) -> GeoPoint {
        let k = (self.first_col + col as i64) as f64;
        let j = (self.first_row + row as i64) as f64;
        let u = self.u0 + k * self.col_pitch + self.half_width;
        let v = self.v0 + j * self.row_pitch + self.half_depth;
        let (east, north) = rotate_to_east_north(u, v, self.azimuth_deg);
        self.frame.from_local(east, north)
    }
}
