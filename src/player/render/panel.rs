//! Flight card and readout panel rendering.

use std::io::{self, Write};

use anyhow::Result;

use crate::ast::FlightCard;
use crate::player::orientation::model_rotation_radians;
use crate::player::readout::Readout;

/// Lines of the flight card block, top to bottom.
pub fn flight_card_lines(card: &FlightCard) -> Vec<String> {
    vec![
        format!("Rocket: {}", card.rocket_name),
        format!("Motor: {}", card.motor_used),
        format!("Flyer: {}", card.flyer),
        format!("Flight Date: {}", card.flight_date),
        format!("Location: {}", card.location),
        format!("Flight Computer: {}", card.flight_computer),
    ]
}

/// Render the flight card block starting at `row`.
pub fn render_flight_card(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    card: &FlightCard,
) -> Result<()> {
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(512);
    for (i, line) in flight_card_lines(card).iter().enumerate() {
        output.push_str(&format!("\x1b[{};1H", row as usize + i + 1));
        output.push_str(CYAN);
        push_padded(&mut output, line, width);
    }
    output.push_str(RESET);
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the "current data" readout block starting at `row`.
///
/// The last line shows the Euler triple handed to the model boundary,
/// so the attitude feed is visible even without a 3D view attached.
pub fn render_readout(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    readout: &Readout,
    orientation_deg: [f64; 3],
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const GREEN: &str = "\x1b[32m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(1024);

    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str(GREEN);
    push_padded(&mut output, "Current Data", width);

    output.push_str(WHITE);
    let mut line_row = row as usize + 1;
    for line in readout.lines() {
        output.push_str(&format!("\x1b[{};1H", line_row + 1));
        push_padded(&mut output, &line, width);
        line_row += 1;
    }

    let [x, y, z] = model_rotation_radians(orientation_deg);
    output.push_str(&format!("\x1b[{};1H", line_row + 1));
    output.push_str(DARK_GREY);
    push_padded(
        &mut output,
        &format!("Model rotation (rad): x={:.3} y={:.3} z={:.3}", x, y, z),
        width,
    );

    output.push_str(RESET);
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Append a line clipped and padded to the terminal width.
fn push_padded(output: &mut String, line: &str, width: u16) {
    let width = width as usize;
    let mut count = 0;
    for c in line.chars() {
        if count >= width {
            break;
        }
        output.push(c);
        count += 1;
    }
    for _ in count..width {
        output.push(' ');
    }
}
