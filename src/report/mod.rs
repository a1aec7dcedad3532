//! Multi-page time-series report export.
//!
//! One line chart per numeric channel found under each sensor group of
//! the flight log, paginated two charts per page, each page a PNG.

mod chart;
mod series;

pub use chart::{render_report, PageOptions, CHARTS_PER_PAGE};
pub use series::{collect_series, SensorSeries};
