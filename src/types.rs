use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Closed ring of geographic points. The closing edge from the last vertex
/// back to the first is implicit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub vertices: Vec<GeoPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl From<Vec<GeoPoint>> for Polygon {
    fn from(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElectricalParams {
    pub voc: f64,
    pub isc: f64,
    pub vmp: f64,
    pub imp: f64,
    pub temp_coeff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub manufacturer: String,
    pub model: String,
    pub power_watts: f64,
    pub efficiency_pct: f64,
    pub width_m: f64,
    pub height_m: f64,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub electrical: ElectricalParams,
    #[serde(default)]
    pub warranty_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub tilt_deg: f64,
    pub azimuth_deg: f64,
    pub orientation: Orientation,
    pub row_spacing_m: f64,
    pub module_spacing_m: f64,
    pub frame_spacing_m: f64,
    pub setback_m: f64,
    pub table_rows: u32,
    pub table_cols: u32,
    #[serde(default)]
    pub max_capacity_kw: Option<f64>,
    #[serde(default)]
    pub horizontal_align: HorizontalAlign,
    #[serde(default)]
    pub vertical_align: VerticalAlign,
}

impl LayoutConfig {
    pub fn panels_per_table(&self) -> u64 {
        self.table_rows as u64 * self.table_cols as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableFootprint {
    /// Along-row extent of the table.
    pub width_m: f64,
    /// Cross-row extent measured along the tilted surface.
    pub height_m: f64,
    /// Horizontal projection of `height_m` at the configured tilt.
    pub ground_depth_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelOffset {
    pub row: u32,
    pub col: u32,
    pub relative_x: f64,
    pub relative_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    pub center: GeoPoint,
    pub corners: [GeoPoint; 4],
    pub rotation_deg: f64,
    pub table_id: String,
    pub row_index: u32,
    pub column_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub panels: Vec<Panel>,
    pub center: GeoPoint,
    pub corners: [GeoPoint; 4],
    pub row_index: u32,
    pub column_index: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub panels: Vec<Panel>,
    pub tables: Vec<Table>,
    pub total_panel_count: u64,
    pub total_capacity_kw: f64,
    pub row_count: u32,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSegment {
    pub id: String,
    pub boundary: Polygon,
}
