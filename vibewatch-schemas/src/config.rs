//! Monitor configuration document
//!
//! One document describes a whole deployment: network layout, default
//! thresholds and the per-sensor overrides in force.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use vibewatch_core::{SensorId, SensorNetwork, ThresholdEvaluator, ThresholdSet};

use crate::snapshot::OverrideSnapshot;
use crate::{SchemaError, SchemaResult};

/// One customized sensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub sensor: SensorId,
    pub thresholds: ThresholdSet,
}

/// Full deployment description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Sensors in the network, numbered from 1
    pub total_sensors: u32,

    /// Areas the sensors are split over
    pub area_count: u32,

    /// Limits for sensors without an override
    #[serde(default)]
    pub defaults: ThresholdSet,

    /// Per-sensor customizations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideEntry>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl MonitorConfig {
    /// Standard plant: 110 sensors, 13 areas, built-in limits, no overrides
    pub fn standard() -> Self {
        let network = SensorNetwork::standard();
        Self {
            total_sensors: network.total_sensors(),
            area_count: network.area_count(),
            defaults: ThresholdSet::DEFAULT,
            overrides: Vec::new(),
        }
    }

    /// Parse a JSON document. Only syntax and shape are checked here;
    /// [`MonitorConfig::build_evaluator`] applies the domain rules.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe an existing evaluator, overrides included
    pub fn capture(evaluator: &ThresholdEvaluator) -> Self {
        let network = evaluator.network();
        Self {
            total_sensors: network.total_sensors(),
            area_count: network.area_count(),
            defaults: *evaluator.defaults(),
            overrides: OverrideSnapshot::capture(evaluator).overrides,
        }
    }

    /// Validated network layout
    pub fn network(&self) -> SchemaResult<SensorNetwork> {
        Ok(SensorNetwork::new(self.total_sensors, self.area_count)?)
    }

    /// Build an evaluator with every override applied
    ///
    /// Fails on the first invalid layout, default set, sensor ID or
    /// threshold, and on a sensor listed twice.
    pub fn build_evaluator(&self) -> SchemaResult<ThresholdEvaluator> {
        check_unique(&self.overrides)?;

        let mut evaluator = ThresholdEvaluator::new(self.network()?, self.defaults)?;
        for entry in &self.overrides {
            evaluator.set_override(entry.sensor, entry.thresholds)?;
        }

        log::info!(
            "Loaded {} sensors over {} areas with {} overrides",
            self.total_sensors,
            self.area_count,
            evaluator.overrides().len(),
        );
        Ok(evaluator)
    }
}

pub(crate) fn check_unique(entries: &[OverrideEntry]) -> SchemaResult<()> {
    let mut seen = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.sensor) {
            return Err(SchemaError::ValidationError(format!(
                "{} listed more than once",
                entry.sensor
            )));
        }
    }
    Ok(())
}
