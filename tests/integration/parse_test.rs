//! Integration tests for flight log loading and headless playback.

use super::helpers::fixtures_dir;
use ftv::player::{collect_event_markers, PlaybackController, PlaybackStatus};
use ftv::store::TelemetryStore;
use ftv::FlightLog;

#[test]
fn fixture_parses_with_expected_shape() {
    let log = FlightLog::parse(fixtures_dir().join("sample.ast")).unwrap();

    assert_eq!(log.flight_card.rocket_name, "AeroSentinel X1");
    assert_eq!(log.samples.len(), 8);
    assert_eq!(log.total_duration_ms(), 3_500);
    assert_eq!(log.samples[1].timestamp_ms, 500);
}

#[test]
fn fixture_has_the_expected_flight_events() {
    let log = FlightLog::parse(fixtures_dir().join("sample.ast")).unwrap();
    let markers = collect_event_markers(&log.samples);

    let names: Vec<&str> = markers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "ascent",
            "takeoff_detection",
            "coasting",
            "apogee",
            "descent",
            "parachute_ejection",
            "recovery"
        ]
    );
    assert_eq!(markers.first().unwrap().time_ms, 500);
    assert_eq!(markers.last().unwrap().time_ms, 3_500);
}

#[test]
fn headless_playback_walks_the_whole_timeline_in_order() {
    let mut store = TelemetryStore::new();
    store.load_path(fixtures_dir().join("sample.ast")).unwrap();

    let mut controller = PlaybackController::new();
    let mut emitted: Vec<u64> = Vec::new();
    let mut sink =
        |_position: f64, sample: &ftv::TelemetrySample| emitted.push(sample.timestamp_ms);

    controller.play(&store).unwrap();

    // 100ms frames: 36 ticks cover the 3.5s recording
    let mut frame_ms = 0.0;
    while controller.tick(frame_ms, &store, &mut sink) {
        frame_ms += 100.0;
    }

    assert_eq!(controller.state().status, PlaybackStatus::Stopped);
    assert_eq!(controller.state().position, 1.0);

    // Emissions arrive in time order and finish on the last sample
    assert!(emitted.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*emitted.first().unwrap(), 0);
    assert_eq!(*emitted.last().unwrap(), 3_500);
}

#[test]
fn reloading_resets_nothing_on_parse_failure() {
    let mut store = TelemetryStore::new();
    store.load_path(fixtures_dir().join("sample.ast")).unwrap();

    assert!(store.load_str("{\"flight_card\": {}}").is_err());

    let flight = store.flight().unwrap();
    assert_eq!(flight.len(), 8);
    assert_eq!(flight.card().rocket_name, "AeroSentinel X1");
}
