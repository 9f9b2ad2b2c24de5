//! Layout job files.
//!
//! A job bundles one module, one mounting configuration and the field
//! segments to lay out. TOML example:
//!
//! ```toml
//! [module]
//! manufacturer = "Acme"
//! model = "AC-450"
//! power_watts = 450.0
//! efficiency_pct = 21.0
//! width_m = 2.0
//! height_m = 1.0
//!
//! [config]
//! tilt_deg = 25.0
//! azimuth_deg = 180.0
//! orientation = "landscape"
//! row_spacing_m = 2.0
//! module_spacing_m = 0.02
//! frame_spacing_m = 1.0
//! setback_m = 5.0
//! table_rows = 4
//! table_cols = 2
//!
//! [[segments]]
//! id = "north-field"
//! boundary = [
//!     { latitude = 40.0, longitude = -3.0 },
//!     { latitude = 40.0, longitude = -2.999 },
//!     { latitude = 40.001, longitude = -2.999 },
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::design::{compute_design_layout, DesignLayout};
use crate::error::{LayoutError, Result};
use crate::types::{FieldSegment, LayoutConfig, ModuleSpec};
use crate::validation::validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutJob {
    pub module: ModuleSpec,
    pub config: LayoutConfig,
    #[serde(default)]
    pub segments: Vec<FieldSegment>,
}

impl LayoutJob {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let job: LayoutJob = toml::from_str(content)?;
        job.validated()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let job: LayoutJob = serde_json::from_str(content)?;
        job.validated()
    }

    /// Reads a job file, picking the parser from the extension
    /// (`.toml` or `.json`).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(LayoutError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn run(&self) -> Result<DesignLayout> {
        compute_design_layout(&self.segments, &self.module, &self.config)
    }

    fn validated(self) -> Result<Self> {
        validate(&self.module, &self.config)?;
        Ok(self)
    }
}
