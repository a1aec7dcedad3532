//! `.ast` flight log format parser
//!
//! An `.ast` file is a single JSON object with a `flight_card` (static
//! descriptive metadata) and a `telemetry` array of samples. Each sample
//! carries a `"SS:mmm"` timestamp, the typed sensor channels the player
//! consumes (BNO055 orientation and acceleration, GPS altitude and
//! velocity), a map of boolean flight-event flags, and any number of
//! additional sensor groups that only the report exporter cares about.
//!
//! Parsing is all-or-nothing: a malformed sample anywhere in the array
//! fails the whole load so callers never observe a half-parsed log.

mod timestamp;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

pub use timestamp::parse_timestamp_ms;

/// Errors raised while loading a flight log.
///
/// Every variant is local to a single load attempt; the caller's previous
/// data stays intact.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed flight log JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sample {index}: invalid timestamp {value:?} (expected \"SS:mmm\")")]
    Timestamp { index: usize, value: String },

    #[error("sample {index}: timestamp {current_ms}ms is earlier than the previous sample ({previous_ms}ms)")]
    TimestampOrder {
        index: usize,
        previous_ms: u64,
        current_ms: u64,
    },

    #[error("sample {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("sample {index}: field `{field}` has the wrong shape")]
    InvalidField { index: usize, field: &'static str },
}

/// Static flight metadata, attached 1:1 to a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightCard {
    pub rocket_name: String,
    pub motor_used: String,
    pub flyer: String,
    pub flight_date: String,
    pub location: String,
    pub flight_computer: String,
}

/// One recorded instant of the flight. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct TelemetrySample {
    /// Offset from the start of the recording, in milliseconds.
    pub timestamp_ms: u64,
    /// The original `"SS:mmm"` string, kept for display.
    pub timestamp_raw: String,
    /// BNO055 `[roll, pitch, yaw]` in degrees.
    pub orientation_deg: [f64; 3],
    /// BNO055 `[x, y, z]` acceleration in m/s².
    pub acceleration_ms2: [f64; 3],
    /// GPS altitude in meters.
    pub gps_altitude_m: f64,
    /// GPS `[x, y, z]` velocity in m/s.
    pub gps_velocity_ms: [f64; 3],
    /// Flight-event flags (e.g. `apogee`, `parachute_ejection`).
    pub events: BTreeMap<String, bool>,
    /// Raw per-sensor JSON groups: every top-level sample key except
    /// `timestamp` and `events`. The report exporter discovers its
    /// channels here.
    pub sensors: Map<String, Value>,
}

impl TelemetrySample {
    /// Names of the events that are active in this sample.
    pub fn active_events(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(_, &active)| active)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// A parsed `.ast` file: flight card plus ordered sample sequence.
#[derive(Debug, Clone)]
pub struct FlightLog {
    pub flight_card: FlightCard,
    pub samples: Vec<TelemetrySample>,
}

#[derive(Deserialize)]
struct RawLog {
    flight_card: FlightCard,
    telemetry: Vec<RawSample>,
}

#[derive(Deserialize)]
struct RawSample {
    timestamp: String,
    events: BTreeMap<String, bool>,
    #[serde(flatten)]
    sensors: Map<String, Value>,
}

impl FlightLog {
    /// Parse a flight log from a file.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&raw)
    }

    /// Parse a flight log from its JSON text.
    pub fn parse_str(raw: &str) -> Result<Self, ParseError> {
        let raw_log: RawLog = serde_json::from_str(raw)?;

        let mut samples = Vec::with_capacity(raw_log.telemetry.len());
        let mut previous_ms = 0u64;

        for (index, raw_sample) in raw_log.telemetry.into_iter().enumerate() {
            let sample = sample_from_raw(index, raw_sample)?;

            if index > 0 && sample.timestamp_ms < previous_ms {
                return Err(ParseError::TimestampOrder {
                    index,
                    previous_ms,
                    current_ms: sample.timestamp_ms,
                });
            }

            previous_ms = sample.timestamp_ms;
            samples.push(sample);
        }

        debug!(samples = samples.len(), "parsed flight log");

        Ok(FlightLog {
            flight_card: raw_log.flight_card,
            samples,
        })
    }

    /// Total recorded duration: the last sample's timestamp, 0 when empty.
    pub fn total_duration_ms(&self) -> u64 {
        self.samples.last().map_or(0, |s| s.timestamp_ms)
    }

    /// Derived per-sample timestamps in milliseconds.
    pub fn timestamps_ms(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.timestamp_ms).collect()
    }
}

fn sample_from_raw(index: usize, raw: RawSample) -> Result<TelemetrySample, ParseError> {
    let timestamp_ms =
        parse_timestamp_ms(&raw.timestamp).ok_or_else(|| ParseError::Timestamp {
            index,
            value: raw.timestamp.clone(),
        })?;

    let orientation_deg = vec3_field(index, &raw.sensors, "bno055_data.orientation")?;
    let acceleration_ms2 = vec3_field(index, &raw.sensors, "bno055_data.acceleration")?;
    let gps_altitude_m = number_field(index, &raw.sensors, "gps_data.altitude")?;
    let gps_velocity_ms = vec3_field(index, &raw.sensors, "gps_data.velocity")?;

    Ok(TelemetrySample {
        timestamp_ms,
        timestamp_raw: raw.timestamp,
        orientation_deg,
        acceleration_ms2,
        gps_altitude_m,
        gps_velocity_ms,
        events: raw.events,
        sensors: raw.sensors,
    })
}

/// Walk a dotted path (`"bno055_data.orientation"`) through the raw
/// sensor map.
fn lookup<'a>(sensors: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    let mut parts = field.split('.');
    let mut current = sensors.get(parts.next()?)?;

    for part in parts {
        current = current.as_object()?.get(part)?;
    }

    Some(current)
}

fn number_field(
    index: usize,
    sensors: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, ParseError> {
    let value = lookup(sensors, field).ok_or(ParseError::MissingField { index, field })?;
    value
        .as_f64()
        .ok_or(ParseError::InvalidField { index, field })
}

fn vec3_field(
    index: usize,
    sensors: &Map<String, Value>,
    field: &'static str,
) -> Result<[f64; 3], ParseError> {
    let value = lookup(sensors, field).ok_or(ParseError::MissingField { index, field })?;
    let array = value
        .as_array()
        .ok_or(ParseError::InvalidField { index, field })?;

    if array.len() != 3 {
        return Err(ParseError::InvalidField { index, field });
    }

    let mut out = [0.0; 3];
    for (slot, item) in out.iter_mut().zip(array) {
        *slot = item
            .as_f64()
            .ok_or(ParseError::InvalidField { index, field })?;
    }

    Ok(out)
}
