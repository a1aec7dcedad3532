//! Interactive terminal playback.
//!
//! Hosts the playback controller: owns the frame loop, polls keyboard
//! input, and renders the flight card, readout panel, progress bar and
//! status bar with raw ANSI. The loop acts as both the frame scheduler
//! and the presentation sink of the core engine.

use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use tracing::debug;

use crate::ast::TelemetrySample;
use crate::config::Config;
use crate::player::input::handle_key_event;
use crate::player::playback::{collect_event_markers, EventMarker, PlaybackController};
use crate::player::readout::Readout;
use crate::player::render::{
    render_flight_card, render_progress_bar, render_readout, render_separator_line,
    render_status_bar,
};
use crate::player::sink::PresentationSink;
use crate::player::state::InputResult;
use crate::store::TelemetryStore;

/// Rows reserved at the bottom of the screen (separator + progress + status).
const STATUS_LINES: u16 = 3;

/// Row where the readout panel starts (below the 6 flight card lines
/// and one blank line).
const READOUT_ROW: u16 = 7;

/// What the sink last received from the controller.
struct LatestSample {
    readout: Readout,
    orientation_deg: [f64; 3],
}

/// Sink that stages emissions for the next draw.
#[derive(Default)]
struct PanelSink {
    latest: Option<LatestSample>,
    dirty: bool,
}

impl PresentationSink for PanelSink {
    fn present(&mut self, _position: f64, sample: &TelemetrySample) {
        self.latest = Some(LatestSample {
            readout: Readout::from_sample(sample),
            orientation_deg: sample.orientation_deg,
        });
        self.dirty = true;
    }
}

/// Play a flight log interactively until the user quits.
///
/// `speed` overrides the configured startup speed when given.
#[cfg(not(tarpaulin_include))]
pub fn play_flight(path: &Path, speed: Option<f64>) -> Result<()> {
    let config = Config::load()?;

    let mut store = TelemetryStore::new();
    store
        .load_path(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let mut controller = PlaybackController::with_speed(speed.unwrap_or(config.player.speed));
    let mut sink = PanelSink::default();

    // Per-screen data pulled out up front so the draw loop does not
    // hold a borrow of the store.
    let (card, markers, total_ms) = {
        let flight = store.flight().context("no flight loaded")?;
        (
            flight.card().clone(),
            collect_event_markers(flight.samples()),
            flight.total_duration_ms(),
        )
    };
    debug!(markers = markers.len(), total_ms, "starting player");

    // Show the first sample, then start the clock.
    controller.rewind(&store, &mut sink);
    controller.play(&store)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run_loop(
        &mut stdout,
        &mut controller,
        &mut sink,
        &store,
        &card,
        &markers,
        total_ms,
        config.player.fps.max(1),
    );

    execute!(stdout, LeaveAlternateScreen, cursor::Show).ok();
    terminal::disable_raw_mode().ok();

    result
}

#[cfg(not(tarpaulin_include))]
#[allow(clippy::too_many_arguments)]
fn run_loop(
    stdout: &mut io::Stdout,
    controller: &mut PlaybackController,
    sink: &mut PanelSink,
    store: &TelemetryStore,
    card: &crate::ast::FlightCard,
    markers: &[EventMarker],
    total_ms: u64,
    fps: u32,
) -> Result<()> {
    let start = Instant::now();
    let frame_budget = Duration::from_millis(1000 / fps as u64);
    let (mut width, mut height) = terminal::size()?;
    let mut full_redraw = true;

    loop {
        // Drain pending input before the next frame advances; pause
        // must win over a queued tick.
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, controller, store, sink) == InputResult::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(new_width, new_height) => {
                    width = new_width;
                    height = new_height;
                    full_redraw = true;
                }
                _ => {}
            }
        }

        if controller.state().is_playing() {
            let frame_ms = start.elapsed().as_secs_f64() * 1000.0;
            controller.tick(frame_ms, store, sink);
        }

        if full_redraw {
            execute!(stdout, Clear(ClearType::All))?;
            render_flight_card(stdout, width, 0, card)?;
            sink.dirty = true;
        }

        if sink.dirty {
            if let Some(latest) = &sink.latest {
                render_readout(
                    stdout,
                    width,
                    READOUT_ROW,
                    &latest.readout,
                    latest.orientation_deg,
                )?;
            }
            sink.dirty = false;
        }

        let bottom = height.saturating_sub(STATUS_LINES);
        render_separator_line(stdout, width, bottom)?;
        render_progress_bar(
            stdout,
            width,
            bottom + 1,
            controller.state().position,
            total_ms,
            markers,
        )?;
        render_status_bar(
            stdout,
            width,
            bottom + 2,
            controller.state().is_playing(),
            controller.state().speed,
            markers.len(),
        )?;
        stdout.flush()?;
        full_redraw = false;

        std::thread::sleep(frame_budget);
    }
}
