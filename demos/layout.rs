use std::path::PathBuf;

use solar_layout::{estimate_by_area, LayoutJob};
use tracing_subscriber::EnvFilter;

fn main() -> solar_layout::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/field.toml")));

    let job = LayoutJob::load(&path)?;
    let design = job.run()?;

    println!("=== Solar Field Layout ===");
    println!("Module: {} {} ({} W)", job.module.manufacturer, job.module.model, job.module.power_watts);
    println!(
        "Mounting: tilt {:.1}°, azimuth {:.1}° (0°=N, 90°=E, 180°=S)",
        job.config.tilt_deg, job.config.azimuth_deg
    );
    println!(
        "Tables: {} x {} panels, setback {:.1} m",
        job.config.table_rows, job.config.table_cols, job.config.setback_m
    );
    println!();

    for (id, segment) in &design.segments {
        println!("--- Segment {} ---", id);
        println!("Area: {:.2} ha", segment.area_m2 / 10_000.0);
        println!("Area-based ceiling: {} panels", estimate_by_area(segment.area_m2, &job.module, &job.config));
        println!("Tables placed: {}", segment.layout.tables.len());
        println!("Panels placed: {}", segment.layout.total_panel_count);
        println!("Rows: {}", segment.layout.row_count);
        println!("Capacity: {:.2} kWp", segment.layout.total_capacity_kw);
        println!();
    }

    let summary = &design.summary;
    println!("--- Design Summary ---");
    println!("Total panels: {}", summary.total_panel_count);
    println!("DC capacity: {:.2} kWp", summary.dc_capacity_kw);
    println!("AC capacity: {:.2} kW (DC/AC {:.2})", summary.ac_capacity_kw, summary.dc_ac_ratio);
    println!("Density: {:.1} kWp/ha", summary.density_kw_per_ha);
    println!("GCR: {:.3}", summary.ground_coverage_ratio);
    println!(
        "Estimated annual production: {:.1} MWh (capacity factor {:.1}%)",
        summary.annual_production_mwh,
        summary.capacity_factor * 100.0
    );
    println!("Generated at: {}", design.generated_at);

    Ok(())
}
