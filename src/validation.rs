use crate::error::{invalid_config, invalid_module, Result};
use crate::metrics::row_pitch;
use crate::types::{LayoutConfig, ModuleSpec};

/// Smallest row pitch the sweep accepts.
pub const MIN_ROW_PITCH_M: f64 = 1e-3;

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid_config(field, format!("must be a finite value >= 0, got {}", value)));
    }
    Ok(())
}

fn positive_dimension(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid_module(field, format!("must be a finite value > 0, got {}", value)));
    }
    Ok(())
}

pub fn validate_config(config: &LayoutConfig) -> Result<()> {
    if !(0.0..=90.0).contains(&config.tilt_deg) {
        return Err(invalid_config(
            "tilt_deg",
            format!("must be within [0, 90], got {}", config.tilt_deg),
        ));
    }
    if !(0.0..360.0).contains(&config.azimuth_deg) {
        return Err(invalid_config(
            "azimuth_deg",
            format!("must be within [0, 360), got {}", config.azimuth_deg),
        ));
    }
    non_negative("row_spacing_m", config.row_spacing_m)?;
    non_negative("module_spacing_m", config.module_spacing_m)?;
    non_negative("frame_spacing_m", config.frame_spacing_m)?;
    non_negative("setback_m", config.setback_m)?;
    if config.table_rows == 0 {
        return Err(invalid_config("table_rows", "must be at least 1"));
    }
    if config.table_cols == 0 {
        return Err(invalid_config("table_cols", "must be at least 1"));
    }
    if let Some(cap) = config.max_capacity_kw {
        non_negative("max_capacity_kw", cap)?;
    }
    Ok(())
}

pub fn validate_module(module: &ModuleSpec) -> Result<()> {
    positive_dimension("width_m", module.width_m)?;
    positive_dimension("height_m", module.height_m)?;
    positive_dimension("power_watts", module.power_watts)?;
    Ok(())
}

/// Full pre-flight check for a layout run.
pub fn validate(module: &ModuleSpec, config: &LayoutConfig) -> Result<()> {
    validate_module(module)?;
    validate_config(config)?;
    let pitch = row_pitch(module, config);
    if pitch < MIN_ROW_PITCH_M {
        return Err(invalid_config(
            "row_spacing_m",
            format!("gives a row pitch of {:.6} m at this tilt, below {} m", pitch, MIN_ROW_PITCH_M),
        ));
    }
    Ok(())
}
