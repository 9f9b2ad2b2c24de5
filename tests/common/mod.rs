#![allow(dead_code, unused_macros)]

use solar_layout::{
    GeoPoint, HorizontalAlign, LayoutConfig, LocalFrame, ModuleSpec, Orientation, Polygon,
    VerticalAlign,
};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

pub const FIELD_CENTER: GeoPoint = GeoPoint {
    latitude: 40.0,
    longitude: -3.7,
};

/// Axis-aligned rectangle of `width_m` (east-west) by `height_m`
/// (north-south) centered on `center`.
pub fn rectangle(center: GeoPoint, width_m: f64, height_m: f64) -> Polygon {
    let frame = LocalFrame::new(center);
    let (hw, hh) = (width_m / 2.0, height_m / 2.0);
    Polygon::new(vec![
        frame.from_local(-hw, -hh),
        frame.from_local(hw, -hh),
        frame.from_local(hw, hh),
        frame.from_local(-hw, hh),
    ])
}

pub fn square_field() -> Polygon {
    rectangle(FIELD_CENTER, 100.0, 100.0)
}

pub fn test_module() -> ModuleSpec {
    ModuleSpec {
        manufacturer: "Acme Solar".to_string(),
        model: "AS-450".to_string(),
        power_watts: 450.0,
        efficiency_pct: 21.0,
        width_m: 2.0,
        height_m: 1.0,
        weight_kg: 24.0,
        electrical: Default::default(),
        warranty_years: 25,
    }
}

/// Mounting used throughout the layout scenarios.
pub fn scenario_config() -> LayoutConfig {
    LayoutConfig {
        tilt_deg: 25.0,
        azimuth_deg: 180.0,
        orientation: Orientation::Landscape,
        row_spacing_m: 2.0,
        module_spacing_m: 0.02,
        frame_spacing_m: 1.0,
        setback_m: 5.0,
        table_rows: 4,
        table_cols: 2,
        max_capacity_kw: None,
        horizontal_align: HorizontalAlign::Left,
        vertical_align: VerticalAlign::Top,
    }
}
