//! Override snapshots
//!
//! A snapshot is just the override list, detached from layout and defaults.
//! The settings screen uses it to export the current customizations and to
//! restore them later (or onto another evaluator with the same layout).

use serde::{Deserialize, Serialize};
use vibewatch_core::ThresholdEvaluator;

use crate::config::{check_unique, OverrideEntry};
use crate::SchemaResult;

/// Exported per-sensor overrides, ascending by sensor ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideSnapshot {
    pub overrides: Vec<OverrideEntry>,
}

impl OverrideSnapshot {
    /// Current overrides of `evaluator`
    pub fn capture(evaluator: &ThresholdEvaluator) -> Self {
        Self {
            overrides: evaluator
                .customized_sensors()
                .map(|(sensor, thresholds)| OverrideEntry { sensor, thresholds: *thresholds })
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Replace every override of `evaluator` with this snapshot
    ///
    /// All-or-nothing: entries are applied to a copy, and `evaluator` is only
    /// updated when every entry was accepted. Returns the number of
    /// customized sensors afterwards (default-equal entries are dropped).
    pub fn restore(&self, evaluator: &mut ThresholdEvaluator) -> SchemaResult<usize> {
        check_unique(&self.overrides)?;

        let mut staged = evaluator.clone();
        staged.reset_all_overrides();
        for entry in &self.overrides {
            staged.set_override(entry.sensor, entry.thresholds)?;
        }

        *evaluator = staged;
        Ok(evaluator.overrides().len())
    }
}
