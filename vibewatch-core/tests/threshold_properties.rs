//! Property and scenario tests for threshold evaluation
//!
//! Covers the boundary rules of `classify` and the default-reconciliation
//! policy of the override store, driven through the public API only.

use proptest::prelude::*;

use vibewatch_core::{
    classify, AlarmStatus, Channel, OverrideOutcome, Reading, SensorId, ThresholdEvaluator,
    ThresholdSet, ThresholdState,
};

fn limits() -> impl Strategy<Value = ThresholdSet> {
    (0.0f32..5.0, 0.0f32..5.0, 0.0f32..5.0, 0.0f32..5.0)
        .prop_map(|(x, y, z, v)| ThresholdSet::new(x, y, z, v))
}

proptest! {
    #[test]
    fn vibration_boundary_is_inclusive(thresholds in limits(), below in 0.001f32..1.0) {
        let at = Reading::new(thresholds.x, 0.0, 0.0, f32::INFINITY);
        prop_assert!(classify(&at, &thresholds).x_exceeded);

        let under = Reading::new(thresholds.x - below, 0.0, 0.0, f32::INFINITY);
        prop_assert!(!classify(&under, &thresholds).x_exceeded);
    }

    #[test]
    fn voltage_boundary_is_exclusive(thresholds in limits(), delta in 0.001f32..1.0) {
        let at = Reading::new(-1.0, -1.0, -1.0, thresholds.voltage);
        prop_assert!(!classify(&at, &thresholds).voltage_under);

        let below = Reading::new(-1.0, -1.0, -1.0, thresholds.voltage - delta);
        prop_assert!(classify(&below, &thresholds).voltage_under);
    }

    #[test]
    fn status_agrees_with_flags(
        thresholds in limits(),
        x in 0.0f32..5.0, y in 0.0f32..5.0, z in 0.0f32..5.0, v in 0.0f32..5.0,
    ) {
        let result = classify(&Reading::new(x, y, z, v), &thresholds);
        let flagged: Vec<Channel> = Channel::ALL
            .into_iter()
            .filter(|&c| result.exceeded(c))
            .collect();

        prop_assert_eq!(result.status.channels(), flagged.as_slice());
        prop_assert_eq!(result.is_alarm(), !flagged.is_empty());
    }

    #[test]
    fn default_candidate_always_reverts(sensor in 1u32..=110, prior in limits()) {
        let mut evaluator = ThresholdEvaluator::standard();
        let sensor = SensorId::new(sensor);
        evaluator.set_override(sensor, prior).unwrap();

        let outcome = evaluator.set_override(sensor, ThresholdSet::DEFAULT).unwrap();
        prop_assert_eq!(outcome, OverrideOutcome::RevertedToDefault);
        prop_assert_eq!(evaluator.effective_thresholds(sensor).unwrap(), ThresholdSet::DEFAULT);
        prop_assert!(evaluator.overrides().get(sensor).is_none());
    }

    #[test]
    fn untouched_sensors_use_defaults(sensor in 1u32..=110) {
        let evaluator = ThresholdEvaluator::standard();
        let sensor = SensorId::new(sensor);
        prop_assert_eq!(evaluator.effective_thresholds(sensor).unwrap(), ThresholdSet::DEFAULT);
        prop_assert_eq!(evaluator.state(sensor).unwrap(), ThresholdState::Default);
    }
}

#[test]
fn x_at_default_limit_is_alarm() {
    let defaults = ThresholdSet::new(0.5, 0.5, 2.0, 2.8);
    let result = classify(&Reading::new(0.5, 0.1, 1.0, 3.3), &defaults);

    assert!(result.x_exceeded);
    assert!(!result.y_exceeded && !result.z_exceeded && !result.voltage_under);
    assert_eq!(result.status.channels(), &[Channel::X]);
    assert_eq!(result.status.to_string(), "Alarm (X)");
}

#[test]
fn default_equal_override_is_a_no_op() {
    let mut evaluator = ThresholdEvaluator::standard();
    let sensor = "Sensor-005".parse::<SensorId>().unwrap();

    let outcome = evaluator
        .set_override(sensor, ThresholdSet::new(0.5, 0.5, 2.0, 2.8))
        .unwrap();

    assert_eq!(outcome, OverrideOutcome::RevertedToDefault);
    assert_eq!(evaluator.state(sensor).unwrap(), ThresholdState::Default);
    assert!(evaluator.overrides().is_empty());
}

#[test]
fn settings_workflow_state_machine() {
    let mut evaluator = ThresholdEvaluator::standard();
    let sensor = SensorId::new(42);
    let loose = ThresholdSet::new(0.8, 0.8, 2.5, 2.5);
    let tight = ThresholdSet::new(0.3, 0.3, 1.5, 3.0);
    let reading = Reading::new(0.6, 0.0, 1.0, 3.3);

    // Default: 0.6 G is over the 0.5 G default
    assert!(evaluator.evaluate(sensor, reading).unwrap().classification.is_alarm());

    // Default -> Customized
    assert_eq!(evaluator.set_override(sensor, loose), Ok(OverrideOutcome::Override));
    assert_eq!(evaluator.state(sensor), Ok(ThresholdState::Customized));
    assert_eq!(
        evaluator.evaluate(sensor, reading).unwrap().classification.status,
        AlarmStatus::Normal
    );

    // Customized -> Customized
    assert_eq!(evaluator.set_override(sensor, tight), Ok(OverrideOutcome::Override));
    assert_eq!(evaluator.effective_thresholds(sensor), Ok(tight));

    // Customized -> Default via reset
    assert_eq!(evaluator.clear_override(sensor), Ok(true));
    assert_eq!(evaluator.state(sensor), Ok(ThresholdState::Default));
    assert_eq!(evaluator.clear_override(sensor), Ok(false));
}
