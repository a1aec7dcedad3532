//! `ftv info` - flight log summary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use ftv::player::render::{flight_card_lines, format_clock};
use ftv::player::{collect_event_markers, readout};
use ftv::report::collect_series;
use ftv::store::TelemetryStore;

pub fn handle_info(file: &Path) -> Result<()> {
    let file_size = fs::metadata(file).map(|m| m.len()).ok();

    let mut store = TelemetryStore::new();
    store
        .load_path(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let flight = store.flight().context("no flight loaded")?;

    for line in flight_card_lines(flight.card()) {
        println!("{}", line);
    }

    println!();
    println!("Samples: {}", flight.len());
    println!("Duration: {}", format_clock(flight.total_duration_ms()));
    println!("Sensor channels: {}", collect_series(flight.samples()).len());
    if let Some(size) = file_size {
        println!("File size: {}", format_size(size, DECIMAL));
    }

    let markers = collect_event_markers(flight.samples());
    if !markers.is_empty() {
        println!();
        println!("Flight events:");
        for marker in &markers {
            println!(
                "  {}  {}",
                format_clock(marker.time_ms),
                readout::display_event_name(&marker.name)
            );
        }
    }

    Ok(())
}
