//! `ftv report` - per-sensor time-series export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ftv::ast::FlightCard;
use ftv::files::sanitize_component;
use ftv::report::{collect_series, render_report, PageOptions};
use ftv::store::TelemetryStore;
use ftv::Config;

pub fn handle_report(file: &Path, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;

    let mut store = TelemetryStore::new();
    store
        .load_path(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let flight = store.flight().context("no flight loaded")?;

    let series = collect_series(flight.samples());
    if series.is_empty() {
        println!("No numeric sensor channels found; nothing to chart.");
        return Ok(());
    }

    let out_dir = output.unwrap_or_else(|| default_output_dir(flight.card()));
    let options = PageOptions {
        width: config.report.chart_width,
        height: config.report.chart_height,
    };

    let pages = render_report(&series, &out_dir, options)?;

    println!(
        "Rendered {} chart(s) across {} page(s) in {}",
        series.len(),
        pages.len(),
        out_dir.display()
    );
    Ok(())
}

/// Default output directory: rocket name plus a local date stamp.
fn default_output_dir(card: &FlightCard) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!(
        "report-{}-{}",
        sanitize_component(&card.rocket_name),
        stamp
    ))
}
