//! Threshold sets for the four monitored channels
//!
//! A [`ThresholdSet`] holds three vibration ceilings and one voltage floor.
//! The same type serves as the process-wide default and as a per-sensor
//! override; only the store in [`crate::overrides`] tells them apart.

use crate::constants::thresholds::{
    DEFAULT_VOLTAGE_FLOOR_V, DEFAULT_X_LIMIT_G, DEFAULT_Y_LIMIT_G, DEFAULT_Z_LIMIT_G,
};
use crate::errors::{MonitorError, MonitorResult, ThresholdField};

/// Alarm bounds for one sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdSet {
    /// X-axis limit in G; readings at or above alarm
    pub x: f32,
    /// Y-axis limit in G; readings at or above alarm
    pub y: f32,
    /// Z-axis limit in G; readings at or above alarm
    pub z: f32,
    /// Voltage floor in V; readings strictly below alarm
    pub voltage: f32,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ThresholdSet {
    /// Process-wide default bounds
    pub const DEFAULT: Self = Self {
        x: DEFAULT_X_LIMIT_G,
        y: DEFAULT_Y_LIMIT_G,
        z: DEFAULT_Z_LIMIT_G,
        voltage: DEFAULT_VOLTAGE_FLOOR_V,
    };

    /// Build a threshold set. No validation happens here; see [`ThresholdSet::validate`].
    pub const fn new(x: f32, y: f32, z: f32, voltage: f32) -> Self {
        Self { x, y, z, voltage }
    }

    /// Value of a single field
    pub const fn get(&self, field: ThresholdField) -> f32 {
        match field {
            ThresholdField::X => self.x,
            ThresholdField::Y => self.y,
            ThresholdField::Z => self.z,
            ThresholdField::Voltage => self.voltage,
        }
    }

    /// Fields paired with their values, in X, Y, Z, voltage order
    pub fn fields(&self) -> [(ThresholdField, f32); 4] {
        [
            (ThresholdField::X, self.x),
            (ThresholdField::Y, self.y),
            (ThresholdField::Z, self.z),
            (ThresholdField::Voltage, self.voltage),
        ]
    }

    /// Every field must be `>= 0`. NaN fails the check too.
    ///
    /// Reports the first offending field in X, Y, Z, voltage order.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> MonitorResult<()> {
        for (field, value) in self.fields() {
            // Written as a negated >= so NaN is rejected
            if !(value >= 0.0) {
                return Err(MonitorError::InvalidThreshold { field, value });
            }
        }
        Ok(())
    }
}
