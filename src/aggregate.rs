use crate::types::{LayoutResult, Table};

/// DC nameplate capacity of `panel_count` modules.
pub fn capacity_kw(panel_count: u64, power_watts: f64) -> f64 {
    panel_count as f64 * power_watts / 1000.0
}

/// Collects tables in sweep order and produces the final totals.
#[derive(Debug, Default)]
pub struct LayoutAccumulator {
    tables: Vec<Table>,
    panel_count: u64,
    row_count: u32,
    last_row: Option<u32>,
}

impl LayoutAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel_count(&self) -> u64 {
        self.panel_count
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Tables must arrive in non-decreasing row order; a row counts once,
    /// on its first table.
    pub fn push(&mut self, table: Table) {
        if self.last_row != Some(table.row_index) {
            self.row_count += 1;
            self.last_row = Some(table.row_index);
        }
        self.panel_count += table.panels.len() as u64;
        self.tables.push(table);
    }

    pub fn finish(self, power_watts: f64) -> LayoutResult {
        let panels = self
            .tables
            .iter()
            .flat_map(|t| t.panels.iter().cloned())
            .collect();
        LayoutResult {
            panels,
            total_panel_count: self.panel_count,
            total_capacity_kw: capacity_kw(self.panel_count, power_watts),
            row_count: self.row_count,
            tables: self.tables,
        }
    }
}
