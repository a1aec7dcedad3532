//! Derived values for the "current data" readout.
//!
//! Pure computation from one sample: vector magnitudes, the g
//! conversion for acceleration, and the display form of active event
//! flags. Rendering happens elsewhere.

use crate::ast::TelemetrySample;

/// Standard gravity, used to express acceleration magnitude in g.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Display form of an event flag name: underscores spaced, upper-cased
/// (`"parachute_ejection"` → `"PARACHUTE EJECTION"`).
pub fn display_event_name(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

/// Scalar readout derived from one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// The sample's original `"SS:mmm"` timestamp string.
    pub timestamp: String,
    pub roll_deg: f64,
    pub pitch_deg: f64,
    pub yaw_deg: f64,
    pub altitude_m: f64,
    /// GPS velocity magnitude in m/s.
    pub velocity_ms: f64,
    /// Acceleration magnitude in g.
    pub acceleration_g: f64,
    /// Active event flags in display form.
    pub active_events: Vec<String>,
}

impl Readout {
    pub fn from_sample(sample: &TelemetrySample) -> Self {
        let [roll_deg, pitch_deg, yaw_deg] = sample.orientation_deg;

        Self {
            timestamp: sample.timestamp_raw.clone(),
            roll_deg,
            pitch_deg,
            yaw_deg,
            altitude_m: sample.gps_altitude_m,
            velocity_ms: magnitude(sample.gps_velocity_ms),
            acceleration_g: magnitude(sample.acceleration_ms2) / STANDARD_GRAVITY,
            active_events: sample
                .active_events()
                .into_iter()
                .map(display_event_name)
                .collect(),
        }
    }

    /// The readout panel lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        let events = if self.active_events.is_empty() {
            "None".to_string()
        } else {
            self.active_events.join(", ")
        };

        vec![
            format!("Timestamp: {}", self.timestamp),
            format!(
                "Roll: {:.2}° | Pitch: {:.2}° | Yaw: {:.2}°",
                self.roll_deg, self.pitch_deg, self.yaw_deg
            ),
            format!("Altitude (GPS): {:.2} m", self.altitude_m),
            format!("Velocity (GPS): {:.2} m/s", self.velocity_ms),
            format!("Acceleration: {:.2} G", self.acceleration_g),
            format!("Flight Events: {}", events),
        ]
    }
}

fn magnitude(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
