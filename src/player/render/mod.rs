//! Rendering components for the terminal player.
//!
//! All ANSI drawing for the player screen: flight card and readout
//! panel, progress bar with flight-event markers, and the status bar.

mod panel;
mod progress;
mod status;

pub use panel::{flight_card_lines, render_flight_card, render_readout};
pub use progress::{build_progress_bar_chars, format_clock, render_progress_bar};
pub use status::{render_separator_line, render_status_bar};
