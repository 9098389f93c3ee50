//! Threshold Evaluator: the entry point used by the dashboard
//!
//! ## Overview
//!
//! [`ThresholdEvaluator`] bundles the three pieces of state the dashboard
//! needs to judge a sensor:
//!
//! - the [`SensorNetwork`] layout (immutable after construction)
//! - the default [`ThresholdSet`] (immutable after construction)
//! - the [`OverrideStore`] (mutated only by the settings workflow)
//!
//! Every sensor-scoped call checks the ID against the network first, so a
//! stale row from another layout fails with `UnknownSensor` instead of
//! silently reading defaults.
//!
//! ## Typical Refresh
//!
//! ```rust
//! use vibewatch_core::{Reading, SensorId, ThresholdEvaluator, ThresholdSet};
//!
//! let mut evaluator = ThresholdEvaluator::standard();
//! evaluator.set_override(SensorId::new(3), ThresholdSet::new(0.8, 0.8, 2.0, 2.8))?;
//!
//! let area = evaluator.network().area(0)?;
//! let rows = evaluator.evaluate_area(area, |_sensor: SensorId| Reading::new(0.6, 0.1, 1.0, 3.3))?;
//!
//! assert_eq!(rows.len(), 8);
//! // Sensor-003 tolerates 0.6 G, its neighbours do not
//! assert!(!rows[2].classification.is_alarm());
//! assert!(rows[3].classification.is_alarm());
//! # Ok::<(), vibewatch_core::MonitorError>(())
//! ```
//!
//! ## Concurrency
//!
//! Writes need `&mut self`, so a plain evaluator has a single writer by
//! construction. When several request handlers share one evaluator, wrap it
//! in [`SharedEvaluator`]: writers take the whole-map write lock, so no reader
//! observes a half-applied threshold set.

use alloc::vec::Vec;

use crate::classify::{classify, Classification, Reading};
use crate::errors::MonitorResult;
use crate::overrides::{effective_thresholds, OverrideOutcome, OverrideStore, ThresholdState};
use crate::partition::{AreaId, SensorId, SensorNetwork, SensorRange};
use crate::thresholds::ThresholdSet;
use crate::traits::ReadingSource;

/// Everything the live table needs for one row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorStatus {
    /// Sensor the row describes
    pub sensor: SensorId,
    /// Area that owns the sensor
    pub area: AreaId,
    /// Reading that was judged
    pub reading: Reading,
    /// Thresholds the reading was judged against
    pub thresholds: ThresholdSet,
    /// Per-channel verdict
    pub classification: Classification,
}

/// Network layout, defaults and overrides behind one interface
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdEvaluator {
    network: SensorNetwork,
    defaults: ThresholdSet,
    overrides: OverrideStore,
}

impl Default for ThresholdEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl ThresholdEvaluator {
    /// Create an evaluator with no overrides
    ///
    /// The layout is re-checked and the defaults go through the same
    /// validation as override candidates.
    pub fn new(network: SensorNetwork, defaults: ThresholdSet) -> MonitorResult<Self> {
        network.validate()?;
        defaults.validate()?;
        Ok(Self {
            network,
            defaults,
            overrides: OverrideStore::new(),
        })
    }

    /// Standard network with the built-in default thresholds
    pub fn standard() -> Self {
        Self {
            network: SensorNetwork::standard(),
            defaults: ThresholdSet::DEFAULT,
            overrides: OverrideStore::new(),
        }
    }

    /// Network layout
    pub fn network(&self) -> &SensorNetwork {
        &self.network
    }

    /// Thresholds for sensors without an override
    pub fn defaults(&self) -> &ThresholdSet {
        &self.defaults
    }

    /// Per-sensor customizations
    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// Sensors owned by `area`, for the live table and the graph selector
    pub fn sensors_for_area(&self, area: AreaId) -> MonitorResult<SensorRange> {
        self.network.sensors_for_area(area)
    }

    /// Thresholds that apply to `sensor` right now
    pub fn effective_thresholds(&self, sensor: SensorId) -> MonitorResult<ThresholdSet> {
        self.network.check_sensor(sensor)?;
        Ok(effective_thresholds(sensor, &self.overrides, &self.defaults))
    }

    /// Whether `sensor` runs on defaults or on its own override
    pub fn state(&self, sensor: SensorId) -> MonitorResult<ThresholdState> {
        self.network.check_sensor(sensor)?;
        Ok(self.overrides.state(sensor))
    }

    /// Settings form submit
    pub fn set_override(
        &mut self,
        sensor: SensorId,
        candidate: ThresholdSet,
    ) -> MonitorResult<OverrideOutcome> {
        self.network.check_sensor(sensor)?;
        self.overrides.set_override(sensor, candidate, &self.defaults)
    }

    /// Settings form reset. Returns whether an override was removed.
    pub fn clear_override(&mut self, sensor: SensorId) -> MonitorResult<bool> {
        self.network.check_sensor(sensor)?;
        Ok(self.overrides.clear_override(sensor))
    }

    /// Put every sensor back on defaults
    pub fn reset_all_overrides(&mut self) {
        log_debug!("Clearing {} threshold overrides", self.overrides.len());
        self.overrides.clear();
    }

    /// Customized sensors with their overrides, ascending by ID
    pub fn customized_sensors(&self) -> impl Iterator<Item = (SensorId, &ThresholdSet)> + '_ {
        self.overrides.iter()
    }

    /// Judge one reading against the sensor's effective thresholds
    pub fn evaluate(&self, sensor: SensorId, reading: Reading) -> MonitorResult<SensorStatus> {
        let area = self.network.area_of(sensor)?;
        let thresholds = effective_thresholds(sensor, &self.overrides, &self.defaults);
        let classification = classify(&reading, &thresholds);

        Ok(SensorStatus { sensor, area, reading, thresholds, classification })
    }

    /// Sample and judge every sensor in `area`, in ascending sensor order
    pub fn evaluate_area<S>(&self, area: AreaId, mut source: S) -> MonitorResult<Vec<SensorStatus>>
    where
        S: ReadingSource,
    {
        let sensors = self.network.sensors_for_area(area)?;
        let mut rows = Vec::with_capacity(sensors.len());

        for sensor in sensors {
            let thresholds = effective_thresholds(sensor, &self.overrides, &self.defaults);
            let reading = source.read(sensor);
            let classification = classify(&reading, &thresholds);
            rows.push(SensorStatus { sensor, area, reading, thresholds, classification });
        }

        Ok(rows)
    }
}

#[cfg(feature = "std")]
pub use shared::SharedEvaluator;

#[cfg(feature = "std")]
mod shared {
    use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

    use super::*;
    use crate::errors::MonitorError;

    /// [`ThresholdEvaluator`] behind a whole-map `RwLock`
    ///
    /// Share it with `Arc`. Writers are serialized and readers never see a
    /// partially written override.
    #[derive(Debug, Default)]
    pub struct SharedEvaluator {
        inner: RwLock<ThresholdEvaluator>,
    }

    impl SharedEvaluator {
        /// Wrap an evaluator
        pub fn new(evaluator: ThresholdEvaluator) -> Self {
            Self { inner: RwLock::new(evaluator) }
        }

        fn read(&self) -> MonitorResult<RwLockReadGuard<'_, ThresholdEvaluator>> {
            self.inner.read().map_err(|_| MonitorError::LockPoisoned)
        }

        fn write(&self) -> MonitorResult<RwLockWriteGuard<'_, ThresholdEvaluator>> {
            self.inner.write().map_err(|_| MonitorError::LockPoisoned)
        }

        /// See [`ThresholdEvaluator::effective_thresholds`]
        pub fn effective_thresholds(&self, sensor: SensorId) -> MonitorResult<ThresholdSet> {
            self.read()?.effective_thresholds(sensor)
        }

        /// See [`ThresholdEvaluator::state`]
        pub fn state(&self, sensor: SensorId) -> MonitorResult<ThresholdState> {
            self.read()?.state(sensor)
        }

        /// See [`ThresholdEvaluator::set_override`]
        pub fn set_override(
            &self,
            sensor: SensorId,
            candidate: ThresholdSet,
        ) -> MonitorResult<OverrideOutcome> {
            self.write()?.set_override(sensor, candidate)
        }

        /// See [`ThresholdEvaluator::clear_override`]
        pub fn clear_override(&self, sensor: SensorId) -> MonitorResult<bool> {
            self.write()?.clear_override(sensor)
        }

        /// See [`ThresholdEvaluator::evaluate`]
        pub fn evaluate(&self, sensor: SensorId, reading: Reading) -> MonitorResult<SensorStatus> {
            self.read()?.evaluate(sensor, reading)
        }

        /// Run `f` under the read lock
        pub fn with<R>(&self, f: impl FnOnce(&ThresholdEvaluator) -> R) -> MonitorResult<R> {
            Ok(f(&*self.read()?))
        }

        /// Copy of the current state
        pub fn snapshot(&self) -> MonitorResult<ThresholdEvaluator> {
            self.with(|evaluator| evaluator.clone())
        }
    }

}
