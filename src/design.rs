//! Multi-segment designs.
//!
//! A design is a set of independent field segments sharing one module and
//! one mounting configuration. Segments are laid out in parallel; results
//! are keyed by segment id so the output order never depends on
//! scheduling.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LayoutError, Result};
use crate::geodesy::area_m2;
use crate::layout::compute_layout;
use crate::metrics::{summarize, DesignSummary, ProductionAssumptions};
use crate::types::{FieldSegment, LayoutConfig, LayoutResult, ModuleSpec};
use crate::validation::validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentLayout {
    pub area_m2: f64,
    pub layout: LayoutResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignLayout {
    pub segments: BTreeMap<String, SegmentLayout>,
    pub total_panel_count: u64,
    pub total_capacity_kw: f64,
    pub total_area_m2: f64,
    pub summary: DesignSummary,
    pub generated_at: DateTime<Utc>,
}

impl DesignLayout {
    pub fn segment(&self, id: &str) -> Option<&LayoutResult> {
        self.segments.get(id).map(|s| &s.layout)
    }
}

pub fn compute_design_layout(
    segments: &[FieldSegment],
    module: &ModuleSpec,
    config: &LayoutConfig,
) -> Result<DesignLayout> {
    compute_design_layout_with(segments, module, config, ProductionAssumptions::default())
}

/// The capacity cap in `config` applies to each segment on its own.
pub fn compute_design_layout_with(
    segments: &[FieldSegment],
    module: &ModuleSpec,
    config: &LayoutConfig,
    assumptions: ProductionAssumptions,
) -> Result<DesignLayout> {
    validate(module, config)?;

    let mut seen = HashSet::with_capacity(segments.len());
    for segment in segments {
        if !seen.insert(segment.id.as_str()) {
            return Err(LayoutError::DuplicateSegment(segment.id.clone()));
        }
    }

    let laid_out = segments
        .par_iter()
        .map(|segment| {
            let layout = compute_layout(&segment.boundary, module, config)?;
            let area = area_m2(&segment.boundary);
            Ok((segment.id.clone(), SegmentLayout { area_m2: area, layout }))
        })
        .collect::<Result<Vec<_>>>()?;

    let segments: BTreeMap<String, SegmentLayout> = laid_out.into_iter().collect();
    let total_panel_count = segments.values().map(|s| s.layout.total_panel_count).sum();
    let total_area_m2 = segments.values().map(|s| s.area_m2).sum();
    let summary = summarize(total_panel_count, total_area_m2, module, config, assumptions);

    info!(
        segments = segments.len(),
        panels = total_panel_count,
        capacity_kw = summary.dc_capacity_kw,
        "design layout complete"
    );

    Ok(DesignLayout {
        segments,
        total_panel_count,
        total_capacity_kw: summary.dc_capacity_kw,
        total_area_m2,
        summary,
        generated_at: Utc::now(),
    })
}
