//! Constants for VibeWatch Core
//!
//! Centralized numeric defaults for the monitored network and its alarm
//! limits. Values here describe the standard plant layout; deployments with a
//! different layout pass their own numbers to [`crate::SensorNetwork::new`]
//! or load them from a configuration document.
//!
//! ## Organization
//!
//! - **Network**: sensor and area counts, display formatting
//! - **Thresholds**: default alarm limits and history sizing
//!
//! Names carry their unit where one applies (`_G` for acceleration in
//! standard gravity, `_V` for volts).

/// Layout of the standard sensor network.
pub mod network;

/// Default alarm limits and alarm history sizing.
pub mod thresholds;

pub use network::{AREA_COUNT, TOTAL_SENSORS};

pub use thresholds::{
    DEFAULT_HISTORY_CAPACITY, DEFAULT_VOLTAGE_FLOOR_V, DEFAULT_X_LIMIT_G, DEFAULT_Y_LIMIT_G,
    DEFAULT_Z_LIMIT_G,
};
