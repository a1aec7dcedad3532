//! Flight-event markers for the timeline.
//!
//! The rising edge of each boolean event flag (takeoff detection,
//! apogee, parachute ejection, ...) becomes a marker that the progress
//! bar and `info` output can point at.

use crate::ast::TelemetrySample;

/// One flight event pinned to its place on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMarker {
    /// Timestamp of the sample where the flag first turned on.
    pub time_ms: u64,
    /// The raw event flag name (`"apogee"`, `"parachute_ejection"`, ...).
    pub name: String,
}

/// Collect a marker for every false→true transition of every event
/// flag, in time order. A flag that turns off and on again yields a
/// marker per rising edge.
pub fn collect_event_markers(samples: &[TelemetrySample]) -> Vec<EventMarker> {
    let mut markers = Vec::new();
    let mut previous: Option<&TelemetrySample> = None;

    for sample in samples {
        for (name, &active) in &sample.events {
            if !active {
                continue;
            }
            let was_active = previous
                .map(|p| p.events.get(name).copied().unwrap_or(false))
                .unwrap_or(false);
            if !was_active {
                markers.push(EventMarker {
                    time_ms: sample.timestamp_ms,
                    name: name.clone(),
                });
            }
        }
        previous = Some(sample);
    }

    markers.sort_by_key(|m| m.time_ms);
    markers
}
