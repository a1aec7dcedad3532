//! Playback logic for the telemetry player.
//!
//! This module holds the playback state machine, the timestamp ceiling
//! lookup, and flight-event marker collection.

mod controller;
mod lookup;
mod markers;

pub use controller::{EmptyTelemetryError, PlaybackController};
pub use lookup::ceiling_index;
pub use markers::{collect_event_markers, EventMarker};
