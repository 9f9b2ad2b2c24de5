use crate::angles::{deg_to_rad, rotate_to_east_north};
use crate::geodesy::offset_east_north;
use crate::types::{GeoPoint, LayoutConfig, ModuleSpec, Orientation, Panel, PanelOffset, TableFootprint};

/// Module dimensions as (along-row, cross-row) for the given orientation.
pub fn module_dimensions(module: &ModuleSpec, orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Landscape => (module.width_m, module.height_m),
        Orientation::Portrait => (module.height_m, module.width_m),
    }
}

pub fn table_footprint(module: &ModuleSpec, config: &LayoutConfig) -> TableFootprint {
    let (along, cross) = module_dimensions(module, config.orientation);
    let cols = config.table_cols as f64;
    let rows = config.table_rows as f64;
    let width_m = cols * along + (cols - 1.0) * config.module_spacing_m;
    let height_m = rows * cross + (rows - 1.0) * config.module_spacing_m;
    TableFootprint {
        width_m,
        height_m,
        ground_depth_m: height_m * deg_to_rad(config.tilt_deg).cos(),
    }
}

/// Corners of a `width_m` × `depth_m` rectangle centered on `center` and
/// rotated to face `azimuth_deg`.
///
/// Order is front-left, front-right, back-right, back-left, where the front
/// edge faces `azimuth_deg` and left is as seen looking along it.
pub fn table_corners(center: GeoPoint, width_m: f64, depth_m: f64, azimuth_deg: f64) -> [GeoPoint; 4] {
    let (hw, hd) = (width_m / 2.0, depth_m / 2.0);
    [(-hw, hd), (hw, hd), (hw, -hd), (-hw, -hd)].map(|(x, y)| {
        let (east, north) = rotate_to_east_north(x, y, azimuth_deg);
        offset_east_north(center, east, north)
    })
}

/// Panel centers relative to the table center, on the tilted surface and
/// before rotation. Row-major; row 0 is the trailing edge.
pub fn panel_offsets_within_table(module: &ModuleSpec, config: &LayoutConfig) -> Vec<PanelOffset> {
    let (along, cross) = module_dimensions(module, config.orientation);
    let col_pitch = along + config.module_spacing_m;
    let row_pitch = cross + config.module_spacing_m;
    let mid_col = (config.table_cols as f64 - 1.0) / 2.0;
    let mid_row = (config.table_rows as f64 - 1.0) / 2.0;

    let mut offsets = Vec::with_capacity(config.panels_per_table() as usize);
    for row in 0..config.table_rows {
        for col in 0..config.table_cols {
            offsets.push(PanelOffset {
                row,
                col,
                relative_x: (col as f64 - mid_col) * col_pitch,
                relative_y: (row as f64 - mid_row) * row_pitch,
            });
        }
    }
    offsets
}

pub fn table_id(row: u32, col: u32) -> String {
    format!("table-{}-{}", row, col)
}

pub fn panel_id(row: u32, col: u32, panel_row: u32, panel_col: u32) -> String {
    format!("panel-{}-{}-{}-{}", row, col, panel_row, panel_col)
}

/// Per-layout table geometry, computed once and reused for every
/// candidate position.
#[derive(Debug, Clone)]
pub struct TableGeometry {
    pub footprint: TableFootprint,
    pub azimuth_deg: f64,
    panel_width_m: f64,
    panel_depth_m: f64,
    cos_tilt: f64,
    offsets: Vec<PanelOffset>,
}

impl TableGeometry {
    pub fn new(module: &ModuleSpec, config: &LayoutConfig) -> Self {
        let (along, cross) = module_dimensions(module, config.orientation);
        let cos_tilt = deg_to_rad(config.tilt_deg).cos();
        Self {
            footprint: table_footprint(module, config),
            azimuth_deg: config.azimuth_deg,
            panel_width_m: along,
            panel_depth_m: cross * cos_tilt,
            cos_tilt,
            offsets: panel_offsets_within_table(module, config),
        }
    }

    pub fn panels_per_table(&self) -> usize {
        self.offsets.len()
    }

    pub fn corners(&self, center: GeoPoint) -> [GeoPoint; 4] {
        table_corners(
            center,
            self.footprint.width_m,
            self.footprint.ground_depth_m,
            self.azimuth_deg,
        )
    }

    pub fn panels(&self, center: GeoPoint, row: u32, col: u32) -> Vec<Panel> {
        let parent = table_id(row, col);
        self.offsets
            .iter()
            .map(|o| {
                let (east, north) =
                    rotate_to_east_north(o.relative_x, o.relative_y * self.cos_tilt, self.azimuth_deg);
                let panel_center = offset_east_north(center, east, north);
                Panel {
                    id: panel_id(row, col, o.row, o.col),
                    center: panel_center,
                    corners: table_corners(
                        panel_center,
                        self.panel_width_m,
                        self.panel_depth_m,
                        self.azimuth_deg,
                    ),
                    rotation_deg: self.azimuth_deg,
                    table_id: parent.clone(),
                    row_index: row,
                    column_index: col,
                }
            })
            .collect()
    }
}
