pub mod aggregate;
pub mod angles;
pub mod config;
pub mod design;
pub mod error;
pub mod geodesy;
pub mod layout;
pub mod metrics;
pub mod setback;
pub mod table;
pub mod types;
pub mod validation;

pub use aggregate::{capacity_kw, LayoutAccumulator};

pub use angles::{deg_to_rad, normalize_angle, rad_to_deg};

pub use config::LayoutJob;

pub use design::{compute_design_layout, compute_design_layout_with, DesignLayout, SegmentLayout};

pub use error::{LayoutError, Result};

pub use geodesy::{
    area_m2, centroid, contains_point, distance_between, heading_between, minimum_width_m, offset,
    Boundary, LocalFrame, EARTH_RADIUS_M, METERS_PER_DEGREE,
};

pub use layout::compute_layout;

pub use metrics::{
    capacity_density_kw_per_ha, estimate_by_area, estimate_by_capacity, ground_coverage_ratio,
    row_pitch, summarize, DesignSummary, ProductionAssumptions,
};

pub use setback::{buildable_area, shrink};

pub use table::{panel_offsets_within_table, table_corners, table_footprint, TableGeometry};

pub use types::{
    ElectricalParams, FieldSegment, GeoPoint, HorizontalAlign, LayoutConfig, LayoutResult,
    ModuleSpec, Orientation, Panel, PanelOffset, Polygon, Table, TableFootprint, VerticalAlign,
};

pub use validation::{validate, validate_config, validate_module};
