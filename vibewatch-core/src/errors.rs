//! Error Types for Monitoring Configuration and Threshold Updates
//!
//! ## Design Philosophy
//!
//! Errors are returned from the settings workflow and from lookups driven by
//! the dashboard, so they follow the same rules as the rest of the core:
//!
//! 1. **Small Size**: Variants carry only the numbers needed to explain the
//!    failure. No `String`, only `&'static str` for reasons.
//!
//! 2. **Copy Semantics**: Errors are `Copy` so a UI layer can stash the last
//!    failure next to a form without fighting the borrow checker.
//!
//! 3. **No Side Effects**: The core never logs an error in place of returning
//!    it, never retries, never clamps. The caller decides what the user sees.
//!
//! ## Error Categories
//!
//! - `InvalidConfiguration`: zero areas, zero sensors, or an area index that
//!   does not exist in the network
//! - `InvalidThreshold`: a candidate threshold set with a negative (or NaN)
//!   field. The override store is left untouched.
//! - `UnknownSensor`: a sensor ID outside `[1, total_sensors]`
//! - `LockPoisoned`: a writer panicked while holding the shared evaluator
//!
//! ```rust
//! use vibewatch_core::{MonitorError, SensorId, ThresholdEvaluator, ThresholdSet};
//!
//! let mut evaluator = ThresholdEvaluator::standard();
//! let candidate = ThresholdSet::new(-0.1, 0.5, 2.0, 2.8);
//!
//! match evaluator.set_override(SensorId::new(5), candidate) {
//!     Ok(outcome) => println!("applied: {outcome}"),
//!     Err(MonitorError::InvalidThreshold { field, value }) => {
//!         println!("{field} cannot be {value}");
//!     }
//!     Err(e) => println!("rejected: {e}"),
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for monitoring operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Field of a threshold set, used to pinpoint validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdField {
    /// X-axis vibration limit
    X,
    /// Y-axis vibration limit
    Y,
    /// Z-axis vibration limit
    Z,
    /// Supply voltage floor
    Voltage,
}

impl ThresholdField {
    /// Field name as it appears in configuration documents
    pub const fn name(&self) -> &'static str {
        match self {
            ThresholdField::X => "x",
            ThresholdField::Y => "y",
            ThresholdField::Z => "z",
            ThresholdField::Voltage => "voltage",
        }
    }
}

impl fmt::Display for ThresholdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monitoring errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MonitorError {
    /// Network layout cannot be partitioned
    #[error("Invalid configuration ({total_sensors} sensors, {area_count} areas): {reason}")]
    InvalidConfiguration {
        /// Total sensor count that was requested
        total_sensors: u32,
        /// Area count that was requested
        area_count: u32,
        /// What is wrong with the layout
        reason: &'static str,
    },

    /// Candidate threshold has a field below zero
    #[error("Invalid threshold: {field} = {value} must be >= 0")]
    InvalidThreshold {
        /// Offending field
        field: ThresholdField,
        /// Rejected value
        value: f32,
    },

    /// Sensor ID outside the configured network
    #[error("Unknown sensor {sensor}: valid IDs are 1..={total_sensors}")]
    UnknownSensor {
        /// Requested sensor number
        sensor: u32,
        /// Sensors in the network
        total_sensors: u32,
    },

    /// Shared evaluator lock was poisoned by a panicking writer
    #[error("Evaluator lock poisoned")]
    LockPoisoned,
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidConfiguration { total_sensors, area_count, reason } =>
                defmt::write!(fmt, "Config {}/{}: {}", total_sensors, area_count, reason),
            Self::InvalidThreshold { field, value } =>
                defmt::write!(fmt, "Threshold {} = {} < 0", field.name(), value),
            Self::UnknownSensor { sensor, total_sensors } =>
                defmt::write!(fmt, "Sensor {} not in 1..={}", sensor, total_sensors),
            Self::LockPoisoned =>
                defmt::write!(fmt, "Lock poisoned"),
        }
    }
}
