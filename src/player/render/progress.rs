//! Progress bar rendering for the terminal player.
//!
//! Displays timeline progress with flight-event marker indicators.

use std::io::{self, Write};

use anyhow::Result;

use crate::player::playback::EventMarker;

/// Format a millisecond count as MM:SS.
pub fn format_clock(time_ms: u64) -> String {
    let total_secs = time_ms / 1000;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// The playhead sits at the normalized position; each flight-event
/// marker renders as a diamond at its fraction of the total duration.
///
/// Returns `(bar_chars, filled_count)`.
pub fn build_progress_bar_chars(
    bar_width: usize,
    position: f64,
    total_ms: u64,
    markers: &[EventMarker],
) -> (Vec<char>, usize) {
    let progress = position.clamp(0.0, 1.0);
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    for marker in markers {
        let marker_pos = if total_ms > 0 {
            ((marker.time_ms as f64 / total_ms as f64) * bar_width as f64) as usize
        } else {
            0
        };
        if marker_pos < bar_width && bar[marker_pos] != '⏺' {
            bar[marker_pos] = '◆';
        }
    }

    (bar, filled)
}

/// Render the progress bar with markers and a current/total clock.
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    position: f64,
    total_ms: u64,
    markers: &[EventMarker],
) -> Result<()> {
    let bar_width = (width as usize).saturating_sub(14); // Padding and clock display
    let (bar, filled) = build_progress_bar_chars(bar_width, position, total_ms, markers);

    let current_ms = (position.clamp(0.0, 1.0) * total_ms as f64) as u64;
    let time_display = format!(" {}/{}", format_clock(current_ms), format_clock(total_ms));

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push_str("\x1b[48;5;236m "); // Dark gray background + padding

    // ANSI color codes
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            if c == '◆' {
                output.push_str(YELLOW);
                output.push(c);
                output.push_str(GREEN);
            } else {
                output.push('━');
            }
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
        } else if c == '◆' {
            output.push_str(YELLOW);
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    // Fill remaining width
    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    for _ in 0..remaining {
        output.push(' ');
    }

    output.push_str("\x1b[0m"); // Reset
    write!(stdout, "{}", output)?;

    Ok(())
}
