//! Telemetry playback module
//!
//! Drives a loaded flight log along a normalized timeline and hands the
//! "current" sample to a presentation sink on every frame.
//!
//! # Architecture
//!
//! - `state`: `PlaybackState` and shared types (`PlaybackStatus`, `InputResult`)
//! - `playback/`: the controller state machine, ceiling lookup, event markers
//! - `sink`: the presentation boundary trait
//! - `readout`: derived "current data" values (magnitudes, g conversion, events)
//! - `orientation`: the Euler hand-off contract for the 3D model boundary
//! - `input/`, `render/`: keyboard handling and ANSI rendering for the
//!   terminal player
//!
//! # Usage
//!
//! ```no_run
//! use ftv::player::PlaybackController;
//! use ftv::store::TelemetryStore;
//!
//! let mut store = TelemetryStore::new();
//! store.load_path("flight.ast").unwrap();
//!
//! let mut controller = PlaybackController::new();
//! let mut sink = |position: f64, sample: &ftv::ast::TelemetrySample| {
//!     println!("{:>5.1}% {}", position * 100.0, sample.timestamp_raw);
//! };
//!
//! controller.play(&store).unwrap();
//! let mut frame_ms = 0.0;
//! while controller.tick(frame_ms, &store, &mut sink) {
//!     frame_ms += 16.7;
//! }
//! ```

pub(crate) mod input;
mod native;
pub mod orientation;
pub(crate) mod playback;
pub mod readout;
pub mod render;
pub mod sink;
pub mod state;

pub use native::play_flight;
pub use playback::{
    ceiling_index, collect_event_markers, EmptyTelemetryError, EventMarker, PlaybackController,
};
pub use readout::Readout;
pub use sink::PresentationSink;
pub use state::{InputResult, PlaybackState, PlaybackStatus};
