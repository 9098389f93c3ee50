//! End-to-end flow as the dashboard drives it
//!
//! Load a deployment document, refresh an area, record alarms, customize a
//! sensor from the settings screen, export, and reload the export.

use vibewatch_core::{
    AlarmHistory, Channel, OverrideOutcome, Reading, SensorId, ThresholdSet, ThresholdState,
    Timestamp,
};
use vibewatch_schemas::{MonitorConfig, OverrideSnapshot};

const PLANT: &str = r#"{
    "total_sensors": 110,
    "area_count": 13,
    "defaults": { "x": 0.5, "y": 0.5, "z": 2.0, "voltage": 2.8 },
    "overrides": [
        { "sensor": 98, "thresholds": { "x": 0.9, "y": 0.9, "z": 2.0, "voltage": 2.8 } },
        { "sensor": 5,  "thresholds": { "x": 0.5, "y": 0.5, "z": 2.0, "voltage": 2.8 } }
    ]
}"#;

/// Fixed readings per sensor: 97 and 98 shake at 0.7 G, 110 browns out
fn plant_reading(sensor: SensorId) -> Reading {
    match sensor.get() {
        97 | 98 => Reading::new(0.7, 0.05, 1.0, 3.3),
        110 => Reading::new(0.02, 0.01, 1.0, 2.6),
        _ => Reading::new(0.02, 0.02, 1.0, 3.3),
    }
}

#[test]
fn refresh_record_customize_export() {
    let config = MonitorConfig::from_json(PLANT).unwrap();
    let mut evaluator = config.build_evaluator().unwrap();

    // Default-equal entry for sensor 5 was reconciled away
    assert_eq!(evaluator.state(SensorId::new(5)).unwrap(), ThresholdState::Default);
    assert_eq!(evaluator.overrides().len(), 1);

    // Refresh the last area
    let area = evaluator.network().area(12).unwrap();
    let rows = evaluator.evaluate_area(area, plant_reading).unwrap();
    assert_eq!(rows.len(), 14);

    let alarms: Vec<String> = rows
        .iter()
        .filter(|row| row.classification.is_alarm())
        .map(|row| format!("{} {}", row.sensor, row.classification.status))
        .collect();
    assert_eq!(alarms, vec!["Sensor-097 Alarm (X)", "Sensor-110 Alarm (Voltage)"]);

    // Record into history
    let refreshed_at: Timestamp = 1_700_000_000_000;
    let mut history = AlarmHistory::<32>::new();
    for row in &rows {
        history.record(row, refreshed_at);
    }
    assert_eq!(history.len(), 2);
    let newest = history.latest().unwrap();
    assert_eq!(newest.sensor, SensorId::new(110));
    assert_eq!(newest.channel, Channel::Voltage);
    assert_eq!(newest.area.to_string(), "Area M");

    // Operator loosens sensor 97
    let loose = ThresholdSet::new(0.8, 0.5, 2.0, 2.8);
    assert_eq!(
        evaluator.set_override(SensorId::new(97), loose).unwrap(),
        OverrideOutcome::Override
    );
    let row = evaluator.evaluate(SensorId::new(97), plant_reading(SensorId::new(97))).unwrap();
    assert!(!row.classification.is_alarm());

    // Export the whole deployment and reload it
    let exported = MonitorConfig::capture(&evaluator).to_json().unwrap();
    let reloaded = MonitorConfig::from_json(&exported).unwrap().build_evaluator().unwrap();
    assert_eq!(reloaded, evaluator);

    for sensor in reloaded.network().sensors_for_area(area).unwrap() {
        assert_eq!(
            reloaded.effective_thresholds(sensor).unwrap(),
            evaluator.effective_thresholds(sensor).unwrap()
        );
    }
}

#[test]
fn snapshot_moves_overrides_between_sessions() {
    let mut session_a = MonitorConfig::standard().build_evaluator().unwrap();
    session_a.set_override(SensorId::new(12), ThresholdSet::new(0.4, 0.4, 1.8, 3.0)).unwrap();

    let json = OverrideSnapshot::capture(&session_a).to_json().unwrap();

    let mut session_b = MonitorConfig::standard().build_evaluator().unwrap();
    let restored = OverrideSnapshot::from_json(&json).unwrap().restore(&mut session_b).unwrap();

    assert_eq!(restored, 1);
    assert_eq!(
        session_b.effective_thresholds(SensorId::new(12)).unwrap(),
        ThresholdSet::new(0.4, 0.4, 1.8, 3.0)
    );
}

#[test]
fn snapshot_for_smaller_network_is_rejected() {
    let mut big = MonitorConfig::standard().build_evaluator().unwrap();
    big.set_override(SensorId::new(100), ThresholdSet::new(0.9, 0.9, 2.0, 2.8)).unwrap();
    let snapshot = OverrideSnapshot::capture(&big);

    let small_config = MonitorConfig { total_sensors: 64, area_count: 4, ..MonitorConfig::standard() };
    let mut small = small_config.build_evaluator().unwrap();

    assert!(snapshot.restore(&mut small).is_err());
    assert!(small.overrides().is_empty());
}
