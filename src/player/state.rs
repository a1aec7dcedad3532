//! Player state management
//!
//! Contains the `PlaybackState` struct driven by the playback controller,
//! plus shared types used across player modules.

/// Result of processing an input event.
///
/// Returned by the input handler to signal control flow decisions to the
/// host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// The two playback states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Not advancing; the initial state and where every timeline ends up.
    Stopped,
    /// Advancing on each host frame tick.
    Playing,
}

/// Central playback state for the telemetry player.
///
/// Mutated only by the `PlaybackController`, in response to user intent
/// and per-frame clock ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether the timeline is advancing.
    pub status: PlaybackStatus,
    /// Timeline progress as a fraction of total recorded duration, in [0, 1].
    pub position: f64,
    /// Host frame timestamp of the previous tick, in milliseconds.
    /// `None` right after `play()`, so the first tick sees a zero delta.
    pub last_frame_ms: Option<f64>,
    /// Playback speed multiplier (1.0 = recorded rate).
    pub speed: f64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            position: 0.0,
            last_frame_ms: None,
            speed: 1.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Increase playback speed (max 16x).
    pub fn speed_up(&mut self) {
        self.speed = (self.speed * 1.5).min(16.0);
    }

    /// Decrease playback speed (min 0.1x).
    pub fn speed_down(&mut self) {
        self.speed = (self.speed / 1.5).max(0.1);
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
