use serde::{Deserialize, Serialize};

use crate::aggregate::capacity_kw;
use crate::angles::deg_to_rad;
use crate::table::{module_dimensions, table_footprint};
use crate::types::{LayoutConfig, LayoutResult, ModuleSpec};

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;
pub const HOURS_PER_YEAR: f64 = 8_760.0;

/// Center-to-center spacing of successive table rows on the ground.
pub fn row_pitch(module: &ModuleSpec, config: &LayoutConfig) -> f64 {
    table_footprint(module, config).ground_depth_m + config.row_spacing_m
}

/// Ground-projected length of one module along the row, over the row
/// pitch.
pub fn ground_coverage_ratio(module: &ModuleSpec, config: &LayoutConfig) -> f64 {
    let pitch = row_pitch(module, config);
    if pitch <= 0.0 {
        return 0.0;
    }
    let (along, _) = module_dimensions(module, config.orientation);
    along * deg_to_rad(config.tilt_deg).cos() / pitch
}

/// Panel count permitted by the capacity cap alone, or `None` when the
/// configuration is uncapped.
pub fn estimate_by_capacity(module: &ModuleSpec, config: &LayoutConfig) -> Option<u64> {
    let cap = config.max_capacity_kw?;
    let per_panel_kw = module.power_watts / 1000.0;
    if per_panel_kw <= 0.0 {
        return Some(0);
    }
    Some((cap / per_panel_kw).floor() as u64)
}

/// Panel count a field of `area_m2` could hold if it were tiled edge to
/// edge with tables at the row pitch, ignoring frame spacing, boundary
/// shape and setback.
pub fn estimate_by_area(area_m2: f64, module: &ModuleSpec, config: &LayoutConfig) -> u64 {
    let cell = row_pitch(module, config) * table_footprint(module, config).width_m;
    if cell <= 0.0 || area_m2 <= 0.0 {
        return 0;
    }
    (area_m2 / cell * config.panels_per_table() as f64).floor() as u64
}

pub fn capacity_density_kw_per_ha(result: &LayoutResult, area_m2: f64) -> f64 {
    if area_m2 <= 0.0 {
        return 0.0;
    }
    result.total_capacity_kw / (area_m2 / SQUARE_METERS_PER_HECTARE)
}

/// Flat multipliers for a first-pass energy figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionAssumptions {
    pub capacity_factor: f64,
    pub dc_ac_ratio: f64,
}

impl Default for ProductionAssumptions {
    fn default() -> Self {
        Self {
            capacity_factor: 0.171,
            dc_ac_ratio: 1.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub total_panel_count: u64,
    pub dc_capacity_kw: f64,
    pub ac_capacity_kw: f64,
    pub area_ha: f64,
    pub density_kw_per_ha: f64,
    pub ground_coverage_ratio: f64,
    pub annual_production_mwh: f64,
    pub capacity_factor: f64,
    pub dc_ac_ratio: f64,
}

pub fn summarize(
    total_panel_count: u64,
    area_m2: f64,
    module: &ModuleSpec,
    config: &LayoutConfig,
    assumptions: ProductionAssumptions,
) -> DesignSummary {
    let dc_capacity_kw = capacity_kw(total_panel_count, module.power_watts);
    let area_ha = area_m2 / SQUARE_METERS_PER_HECTARE;
    DesignSummary {
        total_panel_count,
        dc_capacity_kw,
        ac_capacity_kw: if assumptions.dc_ac_ratio > 0.0 {
            dc_capacity_kw / assumptions.dc_ac_ratio
        } else {
            0.0
        },
        area_ha,
        density_kw_per_ha: if area_ha > 0.0 { dc_capacity_kw / area_ha } else { 0.0 },
        ground_coverage_ratio: ground_coverage_ratio(module, config),
        annual_production_mwh: dc_capacity_kw / 1000.0 * HOURS_PER_YEAR * assumptions.capacity_factor,
        capacity_factor: assumptions.capacity_factor,
        dc_ac_ratio: assumptions.dc_ac_ratio,
    }
}
