//! Time-series discovery over the raw sensor groups.
//!
//! Each sample keeps its sensor groups as raw JSON; the report charts
//! every numeric leaf it can find there. Scalars chart directly, arrays
//! chart one series per component, nested objects are walked with
//! dotted paths. `timestamp` and `events` never appear here because the
//! parser strips them from the sensor map.

use serde_json::Value;

use crate::ast::TelemetrySample;

/// One numeric channel extracted from the sensor data.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSeries {
    /// Top-level sensor group (`"bno055_data"`, `"gps_data"`, ...).
    pub sensor: String,
    /// Channel path within the group (`"orientation[0]"`, `"quaternion.w"`;
    /// empty when the group itself is a bare number).
    pub channel: String,
    /// (flight time in seconds, value) points.
    pub points: Vec<(f64, f64)>,
}

impl SensorSeries {
    /// Chart title: `sensor.channel`.
    pub fn title(&self) -> String {
        if self.channel.is_empty() {
            self.sensor.clone()
        } else {
            format!("{}.{}", self.sensor, self.channel)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Seg {
    Key(String),
    Index(usize),
}

/// Discover every numeric channel and collect its points, grouped by
/// sensor in the order the groups appear.
///
/// The channel schema comes from the first sample; a sample missing a
/// leaf later simply contributes no point to that series.
pub fn collect_series(samples: &[TelemetrySample]) -> Vec<SensorSeries> {
    let Some(first) = samples.first() else {
        return Vec::new();
    };

    let mut series = Vec::new();

    for (sensor, value) in &first.sensors {
        let mut leaves = Vec::new();
        discover_leaves(value, &mut Vec::new(), &mut leaves);

        for path in leaves {
            let points = samples
                .iter()
                .filter_map(|sample| {
                    let value = sample.sensors.get(sensor)?;
                    let y = leaf_value(value, &path)?;
                    Some((sample.timestamp_ms as f64 / 1000.0, y))
                })
                .collect();

            series.push(SensorSeries {
                sensor: sensor.clone(),
                channel: channel_name(&path),
                points,
            });
        }
    }

    series
}

fn discover_leaves(value: &Value, prefix: &mut Vec<Seg>, out: &mut Vec<Vec<Seg>>) {
    match value {
        Value::Number(_) => out.push(prefix.clone()),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                prefix.push(Seg::Index(i));
                discover_leaves(item, prefix, out);
                prefix.pop();
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                prefix.push(Seg::Key(key.clone()));
                discover_leaves(item, prefix, out);
                prefix.pop();
            }
        }
        // Strings, booleans and nulls are not chartable
        _ => {}
    }
}

fn leaf_value(value: &Value, path: &[Seg]) -> Option<f64> {
    let mut current = value;
    for seg in path {
        current = match seg {
            Seg::Key(key) => current.as_object()?.get(key)?,
            Seg::Index(i) => current.as_array()?.get(*i)?,
        };
    }
    current.as_f64()
}

fn channel_name(path: &[Seg]) -> String {
    let mut name = String::new();
    for seg in path {
        match seg {
            Seg::Key(key) => {
                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(key);
            }
            Seg::Index(i) => {
                name.push_str(&format!("[{i}]"));
            }
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FlightLog;

    fn samples() -> Vec<TelemetrySample> {
        let raw = r#"{
            "flight_card": {
                "rocket_name": "r", "motor_used": "m", "flyer": "f",
                "flight_date": "d", "location": "l", "flight_computer": "c"
            },
            "telemetry": [
                {
                    "timestamp": "00:000",
                    "bno055_data": {
                        "orientation": [1.0, 2.0, 3.0],
                        "acceleration": [0.0, 0.0, 9.81],
                        "temperature": 20.0,
                        "quaternion": {"w": 1.0, "x": 0.0},
                        "chip": "BNO055"
                    },
                    "gps_data": {"altitude": 0.0, "velocity": [0.0, 0.0, 0.0]},
                    "events": {"apogee": false}
                },
                {
                    "timestamp": "00:500",
                    "bno055_data": {
                        "orientation": [1.1, 2.1, 3.1],
                        "acceleration": [0.0, 0.0, 45.0],
                        "temperature": 20.5,
                        "quaternion": {"w": 0.9, "x": 0.1},
                        "chip": "BNO055"
                    },
                    "gps_data": {"altitude": 10.0, "velocity": [20.0, 0.0, 0.0]},
                    "events": {"apogee": false}
                }
            ]
        }"#;
        FlightLog::parse_str(raw).unwrap().samples
    }

    #[test]
    fn empty_samples_yield_no_series() {
        assert!(collect_series(&[]).is_empty());
    }

    #[test]
    fn discovers_scalars_vectors_and_nested_objects() {
        let series = collect_series(&samples());
        let titles: Vec<String> = series.iter().map(|s| s.title()).collect();

        assert!(titles.contains(&"bno055_data.orientation[0]".to_string()));
        assert!(titles.contains(&"bno055_data.orientation[1]".to_string()));
        assert!(titles.contains(&"bno055_data.orientation[2]".to_string()));
        assert!(titles.contains(&"bno055_data.temperature".to_string()));
        assert!(titles.contains(&"bno055_data.quaternion.w".to_string()));
        assert!(titles.contains(&"gps_data.altitude".to_string()));
        assert!(titles.contains(&"gps_data.velocity[0]".to_string()));
    }

    #[test]
    fn non_numeric_leaves_are_skipped() {
        let series = collect_series(&samples());
        assert!(!series.iter().any(|s| s.title().contains("chip")));
    }

    #[test]
    fn timestamp_and_events_never_chart() {
        let series = collect_series(&samples());
        assert!(!series.iter().any(|s| s.sensor == "timestamp"));
        assert!(!series.iter().any(|s| s.sensor == "events"));
    }

    #[test]
    fn points_carry_time_in_seconds() {
        let series = collect_series(&samples());
        let temperature = series
            .iter()
            .find(|s| s.title() == "bno055_data.temperature")
            .unwrap();
        assert_eq!(temperature.points, vec![(0.0, 20.0), (0.5, 20.5)]);
    }

    #[test]
    fn a_sample_missing_a_leaf_contributes_no_point() {
        let mut samples = samples();
        samples[1]
            .sensors
            .get_mut("bno055_data")
            .unwrap()
            .as_object_mut()
            .unwrap()
            .remove("temperature");

        let series = collect_series(&samples);
        let temperature = series
            .iter()
            .find(|s| s.title() == "bno055_data.temperature")
            .unwrap();
        assert_eq!(temperature.points, vec![(0.0, 20.0)]);
    }

    #[test]
    fn expected_channel_count_for_the_fixture() {
        // orientation[3] + acceleration[3] + temperature + quaternion{w,x}
        // + altitude + velocity[3] = 13
        assert_eq!(collect_series(&samples()).len(), 13);
    }
}
