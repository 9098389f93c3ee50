//! Per-Sensor Threshold Overrides
//!
//! ## Overview
//!
//! Operators can customize the alarm bounds of a single sensor from the
//! settings screen. Those customizations live in an [`OverrideStore`], an
//! explicit object owned by whoever runs the settings workflow (usually a
//! [`crate::ThresholdEvaluator`]). There is no global state.
//!
//! ## Reconciliation Policy
//!
//! The store never holds a redundant entry. Submitting a candidate equal to
//! the defaults removes the sensor's entry instead of storing a copy:
//!
//! ```text
//!                set_override(non-default)
//!     ┌─────────┐ ─────────────────────────► ┌────────────┐
//!     │ Default │                            │ Customized │ ◄─┐ set_override(other non-default)
//!     └─────────┘ ◄───────────────────────── └────────────┘ ──┘
//!                set_override(default) / clear_override
//! ```
//!
//! Every sensor starts in `Default`. There is no terminal state.
//!
//! ## Atomicity
//!
//! Candidates are validated before the map is touched, so a rejected
//! candidate leaves the previous entry (or its absence) exactly as it was.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::errors::MonitorResult;
use crate::partition::SensorId;
use crate::thresholds::ThresholdSet;

/// What `set_override` did with a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OverrideOutcome {
    /// Candidate stored as the sensor's override
    Override,
    /// Candidate matched the defaults; any override was removed
    RevertedToDefault,
}

impl fmt::Display for OverrideOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideOutcome::Override => f.write_str("override"),
            OverrideOutcome::RevertedToDefault => f.write_str("reverted-to-default"),
        }
    }
}

/// Threshold configuration state of a single sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdState {
    /// Sensor uses the process-wide defaults
    Default,
    /// Sensor has its own override
    Customized,
}

/// Sensor → override mapping, empty at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideStore {
    entries: BTreeMap<SensorId, ThresholdSet>,
}

impl OverrideStore {
    /// Empty store: every sensor on defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override for `sensor`, if customized
    pub fn get(&self, sensor: SensorId) -> Option<&ThresholdSet> {
        self.entries.get(&sensor)
    }

    /// Current state of `sensor`
    pub fn state(&self, sensor: SensorId) -> ThresholdState {
        if self.entries.contains_key(&sensor) {
            ThresholdState::Customized
        } else {
            ThresholdState::Default
        }
    }

    /// Number of customized sensors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no sensor is customized
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Customized sensors in ascending ID order
    pub fn iter(&self) -> impl Iterator<Item = (SensorId, &ThresholdSet)> + '_ {
        self.entries.iter().map(|(sensor, set)| (*sensor, set))
    }

    /// Apply a candidate from the settings form
    ///
    /// Fails with `InvalidThreshold` (store unchanged) if any field is
    /// negative. A default-equal candidate removes the override.
    pub fn set_override(
        &mut self,
        sensor: SensorId,
        candidate: ThresholdSet,
        defaults: &ThresholdSet,
    ) -> MonitorResult<OverrideOutcome> {
        if let Err(e) = candidate.validate() {
            log_warn!("Rejected thresholds for {}: {}", sensor, e);
            return Err(e);
        }

        if candidate == *defaults {
            if self.entries.remove(&sensor).is_some() {
                log_debug!("{} reverted to default thresholds", sensor);
            }
            return Ok(OverrideOutcome::RevertedToDefault);
        }

        self.entries.insert(sensor, candidate);
        log_debug!("{} customized: {:?}", sensor, candidate);
        Ok(OverrideOutcome::Override)
    }

    /// Drop the override for `sensor`; no-op when it has none
    ///
    /// Returns whether an entry was removed.
    pub fn clear_override(&mut self, sensor: SensorId) -> bool {
        let removed = self.entries.remove(&sensor).is_some();
        if removed {
            log_debug!("{} override cleared", sensor);
        }
        removed
    }

    /// Put every sensor back on defaults
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Thresholds that apply to `sensor`: its override, else `defaults`
pub fn effective_thresholds(
    sensor: SensorId,
    overrides: &OverrideStore,
    defaults: &ThresholdSet,
) -> ThresholdSet {
    overrides.get(sensor).copied().unwrap_or(*defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MonitorError;

    const SENSOR: SensorId = SensorId::new(5);

    fn custom() -> ThresholdSet {
        ThresholdSet::new(0.8, 0.5, 2.0, 2.8)
    }

    #[test]
    fn starts_on_defaults() {
        let store = OverrideStore::new();
        assert!(store.is_empty());
        assert_eq!(store.state(SENSOR), ThresholdState::Default);
        assert_eq!(
            effective_thresholds(SENSOR, &store, &ThresholdSet::DEFAULT),
            ThresholdSet::DEFAULT
        );
    }

    #[test]
    fn default_candidate_is_not_stored() {
        let mut store = OverrideStore::new();
        let outcome = store
            .set_override(SENSOR, ThresholdSet::DEFAULT, &ThresholdSet::DEFAULT)
            .unwrap();

        assert_eq!(outcome, OverrideOutcome::RevertedToDefault);
        assert!(store.get(SENSOR).is_none());
        assert_eq!(store.state(SENSOR), ThresholdState::Default);
    }

    #[test]
    fn customize_then_revert() {
        let mut store = OverrideStore::new();
        let defaults = ThresholdSet::DEFAULT;

        assert_eq!(store.set_override(SENSOR, custom(), &defaults), Ok(OverrideOutcome::Override));
        assert_eq!(store.state(SENSOR), ThresholdState::Customized);
        assert_eq!(effective_thresholds(SENSOR, &store, &defaults), custom());

        let other = ThresholdSet::new(0.6, 0.6, 2.5, 3.0);
        assert_eq!(store.set_override(SENSOR, other, &defaults), Ok(OverrideOutcome::Override));
        assert_eq!(store.get(SENSOR), Some(&other));
        assert_eq!(store.len(), 1);

        assert_eq!(
            store.set_override(SENSOR, defaults, &defaults),
            Ok(OverrideOutcome::RevertedToDefault)
        );
        assert_eq!(store.state(SENSOR), ThresholdState::Default);
        assert_eq!(effective_thresholds(SENSOR, &store, &defaults), defaults);
    }

    #[test]
    fn rejected_candidate_keeps_previous_entry() {
        let mut store = OverrideStore::new();
        let defaults = ThresholdSet::DEFAULT;
        store.set_override(SENSOR, custom(), &defaults).unwrap();

        let bad = ThresholdSet::new(0.8, 0.5, 2.0, -2.8);
        assert!(matches!(
            store.set_override(SENSOR, bad, &defaults),
            Err(MonitorError::InvalidThreshold { .. })
        ));
        assert_eq!(store.get(SENSOR), Some(&custom()));
    }

    #[test]
    fn rejected_candidate_does_not_create_entry() {
        let mut store = OverrideStore::new();
        let bad = ThresholdSet::new(-1.0, 0.5, 2.0, 2.8);
        assert!(store.set_override(SENSOR, bad, &ThresholdSet::DEFAULT).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = OverrideStore::new();
        assert!(!store.clear_override(SENSOR));

        store.set_override(SENSOR, custom(), &ThresholdSet::DEFAULT).unwrap();
        assert!(store.clear_override(SENSOR));
        assert!(!store.clear_override(SENSOR));
        assert_eq!(store.state(SENSOR), ThresholdState::Default);
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(OverrideOutcome::Override.to_string(), "override");
        assert_eq!(OverrideOutcome::RevertedToDefault.to_string(), "reverted-to-default");
    }
}
