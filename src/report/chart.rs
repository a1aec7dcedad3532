//! Report page rendering.
//!
//! Lays series out two charts per page and renders each page as a PNG.
//! Document assembly beyond numbered pages is left to external tooling.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use rayon::prelude::*;
use tracing::{debug, info};

use super::series::SensorSeries;

/// Charts stacked on each report page.
pub const CHARTS_PER_PAGE: usize = 2;

/// Page rendering options.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 960,
        }
    }
}

/// Calculate an axis range with padding.
/// Adds 15% padding, or a fixed padding for degenerate ranges.
fn padded_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Render every series, two per page, into `out_dir`.
///
/// Returns the page paths in order. The final page may hold a single
/// chart. Pages are independent, so they render in parallel.
pub fn render_report(
    series: &[SensorSeries],
    out_dir: &Path,
    options: PageOptions,
) -> Result<Vec<PathBuf>> {
    if series.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create report directory {:?}", out_dir))?;

    let pages: Vec<&[SensorSeries]> = series.chunks(CHARTS_PER_PAGE).collect();

    let paths = pages
        .par_iter()
        .enumerate()
        .map(|(page_index, charts)| {
            let path = out_dir.join(format!("page-{:02}.png", page_index + 1));
            render_page(&path, charts, options)
                .with_context(|| format!("failed to render {:?}", path))?;
            debug!(page = page_index + 1, charts = charts.len(), "page rendered");
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;

    info!(pages = paths.len(), series = series.len(), "report rendered");
    Ok(paths)
}

fn render_page(path: &Path, charts: &[SensorSeries], options: PageOptions) -> Result<()> {
    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    // Always split into the full grid so charts keep the same size on a
    // partial final page.
    let areas = root.split_evenly((CHARTS_PER_PAGE, 1));
    for (area, series) in areas.iter().zip(charts) {
        draw_series_chart(area, series)?;
    }

    root.present()?;
    Ok(())
}

fn draw_series_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    series: &SensorSeries,
) -> Result<()> {
    if series.points.is_empty() {
        let style = ("sans-serif", 20).into_font().color(&RED);
        area.draw(&Text::new(
            format!("{}: no data points", series.title()),
            (50, 50),
            style,
        ))?;
        return Ok(());
    }

    let (x_min, x_max) = padded_range(
        series.points.first().map(|p| p.0).unwrap_or(0.0),
        series.points.last().map(|p| p.0).unwrap_or(0.0),
    );
    let y_min = series.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = series
        .points
        .iter()
        .map(|p| p.1)
        .fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = padded_range(y_min, y_max);

    let mut chart = ChartBuilder::on(area)
        .caption(series.title(), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc(series.channel.clone())
        .draw()?;

    chart.draw_series(LineSeries::new(series.points.iter().copied(), &BLUE))?;

    Ok(())
}
