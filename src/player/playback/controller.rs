//! The playback state machine.
//!
//! Maps host frame timestamps to telemetry samples: each tick advances a
//! normalized timeline position proportionally to elapsed wall time over
//! total recorded duration, ceiling-looks-up the sample for that
//! position, and emits it to the presentation sink.

use tracing::debug;

use crate::player::sink::PresentationSink;
use crate::player::state::{PlaybackState, PlaybackStatus};
use crate::store::TelemetryStore;

/// Play was requested with no telemetry loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no telemetry data loaded; load an .ast file first")]
pub struct EmptyTelemetryError;

/// Drives `PlaybackState` in response to user intent and frame ticks.
///
/// The host owns the frame scheduler; the controller only reports via
/// `tick`'s return value whether another frame should be requested.
/// Ticks are expected in non-decreasing timestamp order while playing.
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with a preset speed multiplier (clamped to 0.1–16.0).
    pub fn with_speed(speed: f64) -> Self {
        let mut controller = Self::new();
        controller.state.speed = speed.clamp(0.1, 16.0);
        controller
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlaybackState {
        &mut self.state
    }

    /// Start (or restart) advancing the timeline.
    ///
    /// Fails without any state change when no non-empty sequence is
    /// loaded. Clears the frame-clock reference so the next tick
    /// computes a zero elapsed delta.
    pub fn play(&mut self, store: &TelemetryStore) -> Result<(), EmptyTelemetryError> {
        if !store.has_samples() {
            return Err(EmptyTelemetryError);
        }

        self.state.status = PlaybackStatus::Playing;
        self.state.last_frame_ms = None;
        debug!(position = self.state.position, "playback started");
        Ok(())
    }

    /// Stop advancing. Idempotent.
    pub fn pause(&mut self) {
        self.state.status = PlaybackStatus::Stopped;
    }

    /// Toggle between playing and stopped.
    pub fn toggle(&mut self, store: &TelemetryStore) -> Result<(), EmptyTelemetryError> {
        if self.state.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play(store)
        }
    }

    /// Stop, jump back to the start, and show the first sample.
    pub fn rewind(&mut self, store: &TelemetryStore, sink: &mut dyn PresentationSink) {
        self.pause();
        self.state.position = 0.0;
        self.state.last_frame_ms = None;

        if let Some(first) = store.flight().and_then(|f| f.samples().first()) {
            sink.present(0.0, first);
        }
    }

    /// Forget playback progress entirely, e.g. after loading new
    /// telemetry. Speed survives; everything else returns to the
    /// initial state.
    pub fn reset(&mut self) {
        let speed = self.state.speed;
        self.state = PlaybackState::new();
        self.state.speed = speed;
    }

    /// Advance the timeline for one host frame.
    ///
    /// No-op unless playing. Advances position by
    /// `speed * elapsed / total_duration` (zero elapsed on the first
    /// tick after `play()`), emits the sample covering the new position,
    /// and returns `true` when the host should schedule another frame.
    /// When the advance pushes position past 1 the timeline is
    /// exhausted: position clamps to 1, the controller stops, and
    /// nothing is emitted.
    pub fn tick(
        &mut self,
        frame_ms: f64,
        store: &TelemetryStore,
        sink: &mut dyn PresentationSink,
    ) -> bool {
        if !self.state.is_playing() {
            return false;
        }

        let Some(flight) = store.flight() else {
            self.state.status = PlaybackStatus::Stopped;
            return false;
        };

        let delta_ms = match self.state.last_frame_ms {
            Some(last) => frame_ms - last,
            None => 0.0,
        };
        self.state.last_frame_ms = Some(frame_ms);

        let total_ms = flight.total_duration_ms();
        if total_ms == 0 {
            // Single-instant log: show it once and finish.
            if let Some(first) = flight.samples().first() {
                sink.present(1.0, first);
            }
            self.state.position = 1.0;
            self.state.status = PlaybackStatus::Stopped;
            return false;
        }

        self.state.position += self.state.speed * delta_ms / total_ms as f64;

        if self.state.position > 1.0 {
            self.state.position = 1.0;
            self.state.status = PlaybackStatus::Stopped;
            self.state.last_frame_ms = None;
            debug!("timeline exhausted");
            return false;
        }

        let current_ms = self.state.position * total_ms as f64;
        if let Some(sample) = flight.sample_at(current_ms) {
            sink.present(self.state.position, sample);
        }

        true
    }
}
