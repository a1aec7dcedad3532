//! In-memory telemetry store.
//!
//! Owns the currently loaded flight and its derived per-sample
//! timestamps. A successful load replaces the previous flight wholesale;
//! a failed load leaves it untouched, so readers never observe a
//! half-updated sequence.

use std::path::Path;

use tracing::debug;

use crate::ast::{FlightCard, FlightLog, ParseError, TelemetrySample};
use crate::player::playback::ceiling_index;

/// A flight log with its lookup tables, as held by the store.
#[derive(Debug, Clone)]
pub struct LoadedFlight {
    card: FlightCard,
    samples: Vec<TelemetrySample>,
    times_ms: Vec<u64>,
    total_ms: u64,
}

impl LoadedFlight {
    fn from_log(log: FlightLog) -> Self {
        let times_ms = log.timestamps_ms();
        let total_ms = log.total_duration_ms();
        Self {
            card: log.flight_card,
            samples: log.samples,
            times_ms,
            total_ms,
        }
    }

    pub fn card(&self) -> &FlightCard {
        &self.card
    }

    pub fn samples(&self) -> &[TelemetrySample] {
        &self.samples
    }

    /// Per-sample timestamps in milliseconds, parallel to `samples()`.
    pub fn times_ms(&self) -> &[u64] {
        &self.times_ms
    }

    /// Total recorded duration: the last sample's timestamp.
    pub fn total_duration_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample covering `query_ms`: first sample with a timestamp at
    /// or past the query, the last sample when the query runs off the
    /// end. `None` only when the flight has no samples.
    pub fn sample_at(&self, query_ms: f64) -> Option<&TelemetrySample> {
        let index = ceiling_index(&self.times_ms, query_ms)?;
        Some(&self.samples[index])
    }
}

/// Holder of the one currently loaded flight.
#[derive(Debug, Default)]
pub struct TelemetryStore {
    current: Option<LoadedFlight>,
}

impl TelemetryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a flight log from a file, replacing the current flight on
    /// success only.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<&LoadedFlight, ParseError> {
        let log = FlightLog::parse(path)?;
        Ok(self.install(log))
    }

    /// Load a flight log from JSON text, replacing the current flight on
    /// success only.
    pub fn load_str(&mut self, raw: &str) -> Result<&LoadedFlight, ParseError> {
        let log = FlightLog::parse_str(raw)?;
        Ok(self.install(log))
    }

    fn install(&mut self, log: FlightLog) -> &LoadedFlight {
        let flight = LoadedFlight::from_log(log);
        debug!(
            rocket = %flight.card.rocket_name,
            samples = flight.len(),
            duration_ms = flight.total_ms,
            "telemetry loaded"
        );
        self.current.insert(flight)
    }

    /// The currently loaded flight, if any.
    pub fn flight(&self) -> Option<&LoadedFlight> {
        self.current.as_ref()
    }

    /// True when a flight with at least one sample is loaded.
    pub fn has_samples(&self) -> bool {
        self.current.as_ref().is_some_and(|f| !f.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_json(timestamps: &[&str]) -> String {
        let samples: Vec<String> = timestamps
            .iter()
            .map(|ts| {
                format!(
                    r#"{{
                        "timestamp": "{ts}",
                        "bno055_data": {{
                            "orientation": [0.0, 0.0, 0.0],
                            "acceleration": [0.0, 0.0, 9.81]
                        }},
                        "gps_data": {{"altitude": 0.0, "velocity": [0.0, 0.0, 0.0]}},
                        "events": {{}}
                    }}"#
                )
            })
            .collect();
        format!(
            r#"{{
                "flight_card": {{
                    "rocket_name": "Store Test", "motor_used": "m", "flyer": "f",
                    "flight_date": "d", "location": "l", "flight_computer": "c"
                }},
                "telemetry": [{}]
            }}"#,
            samples.join(",")
        )
    }

    #[test]
    fn starts_empty() {
        let store = TelemetryStore::new();
        assert!(store.flight().is_none());
        assert!(!store.has_samples());
    }

    #[test]
    fn load_installs_flight_and_derives_times() {
        let mut store = TelemetryStore::new();
        store.load_str(&log_json(&["00:000", "00:500", "01:000"])).unwrap();

        let flight = store.flight().unwrap();
        assert_eq!(flight.times_ms(), &[0, 500, 1000]);
        assert_eq!(flight.total_duration_ms(), 1000);
        assert!(store.has_samples());
    }

    #[test]
    fn successful_load_replaces_wholesale() {
        let mut store = TelemetryStore::new();
        store.load_str(&log_json(&["00:000", "01:000"])).unwrap();
        store.load_str(&log_json(&["00:000", "00:100", "00:200"])).unwrap();

        let flight = store.flight().unwrap();
        assert_eq!(flight.len(), 3);
        assert_eq!(flight.total_duration_ms(), 200);
    }

    #[test]
    fn failed_load_keeps_previous_flight() {
        let mut store = TelemetryStore::new();
        store.load_str(&log_json(&["00:000", "01:000"])).unwrap();

        assert!(store.load_str("{broken").is_err());

        let flight = store.flight().unwrap();
        assert_eq!(flight.len(), 2);
        assert_eq!(flight.total_duration_ms(), 1000);
    }

    #[test]
    fn load_path_reports_missing_file() {
        let mut store = TelemetryStore::new();
        assert!(matches!(
            store.load_path("/nonexistent/flight.ast"),
            Err(ParseError::Io { .. })
        ));
    }

    #[test]
    fn empty_flight_counts_as_no_samples() {
        let mut store = TelemetryStore::new();
        store.load_str(&log_json(&[])).unwrap();
        assert!(store.flight().is_some());
        assert!(!store.has_samples());
    }

    #[test]
    fn sample_at_uses_ceiling_lookup() {
        let mut store = TelemetryStore::new();
        store.load_str(&log_json(&["00:000", "00:500", "01:000"])).unwrap();
        let flight = store.flight().unwrap();

        assert_eq!(flight.sample_at(0.0).unwrap().timestamp_ms, 0);
        assert_eq!(flight.sample_at(250.0).unwrap().timestamp_ms, 500);
        assert_eq!(flight.sample_at(500.0).unwrap().timestamp_ms, 500);
        assert_eq!(flight.sample_at(5000.0).unwrap().timestamp_ms, 1000);
    }
}
