//! Property tests for area partitioning
//!
//! Checks the partition guarantees over arbitrary layouts rather than the
//! standard 110/13 network alone.

use proptest::prelude::*;

use vibewatch_core::{sensors_for_area, MonitorError, SensorId, SensorNetwork};

proptest! {
    #[test]
    fn areas_cover_every_sensor_once(area_count in 1u32..40, extra in 0u32..400) {
        let total = area_count + extra;

        let mut seen = Vec::new();
        for index in 0..area_count {
            let range = sensors_for_area(index, total, area_count).unwrap();
            seen.extend(range.iter().map(SensorId::get));
        }

        // Ascending concatenation of ranges == 1..=total means no gaps and no overlaps
        prop_assert_eq!(seen, (1..=total).collect::<Vec<_>>());
    }

    #[test]
    fn last_area_absorbs_remainder(area_count in 1u32..40, total in 1u32..500) {
        let base = total / area_count;
        let remainder = total % area_count;

        for index in 0..area_count - 1 {
            prop_assert_eq!(sensors_for_area(index, total, area_count).unwrap().len() as u32, base);
        }
        let last = sensors_for_area(area_count - 1, total, area_count).unwrap();
        prop_assert_eq!(last.len() as u32, base + remainder);
    }

    #[test]
    fn area_of_agrees_with_ranges(area_count in 1u32..40, total in 1u32..500) {
        let network = SensorNetwork::new(total, area_count).unwrap();

        for area in network.areas() {
            for sensor in network.sensors_for_area(area).unwrap() {
                prop_assert_eq!(network.area_of(sensor).unwrap(), area);
            }
        }
    }

    #[test]
    fn partition_is_pure(index in 0u32..13, total in 13u32..1000) {
        let first = sensors_for_area(index, total, 13).unwrap();
        let second = sensors_for_area(index, total, 13).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_areas_always_invalid(index in 0u32..10, total in 0u32..1000) {
        let is_invalid_config = matches!(
            sensors_for_area(index, total, 0),
            Err(MonitorError::InvalidConfiguration { .. })
        );
        prop_assert!(is_invalid_config);
    }
}

#[test]
fn standard_network_scenario() {
    let network = SensorNetwork::standard();

    let sizes: Vec<usize> = network.summary().map(|(_, size)| size).collect();
    assert_eq!(sizes, vec![8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 14]);

    let first = network.sensors_for_area(network.area(0).unwrap()).unwrap();
    let labels: Vec<String> = first.iter().map(|s| s.to_string()).collect();
    assert_eq!(labels.first().map(String::as_str), Some("Sensor-001"));
    assert_eq!(labels.last().map(String::as_str), Some("Sensor-008"));

    let last_area = network.area(12).unwrap();
    let last = network.sensors_for_area(last_area).unwrap();
    assert_eq!(last_area.to_string(), "Area M");
    assert_eq!(last.first().unwrap().to_string(), "Sensor-097");
    assert_eq!(last.last().unwrap().to_string(), "Sensor-110");
}
