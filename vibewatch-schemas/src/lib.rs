//! Configuration Documents for VibeWatch
//!
//! ## Overview
//!
//! The core crate knows the standard plant layout at compile time. Real
//! deployments differ: a second plant may have 64 sensors over 4 areas, a
//! noisy line may need looser default limits, and operators expect their
//! per-sensor customizations to survive a restart of the dashboard.
//!
//! This crate describes all of that as plain JSON documents and turns them
//! into ready-to-use [`ThresholdEvaluator`]s.
//!
//! ## Document Layout
//!
//! ```json
//! {
//!   "total_sensors": 110,
//!   "area_count": 13,
//!   "defaults": { "x": 0.5, "y": 0.5, "z": 2.0, "voltage": 2.8 },
//!   "overrides": [
//!     { "sensor": 42, "thresholds": { "x": 0.8, "y": 0.8, "z": 2.0, "voltage": 2.8 } }
//!   ]
//! }
//! ```
//!
//! `defaults` and `overrides` are optional; missing defaults fall back to the
//! built-in limits and missing overrides mean every sensor is on defaults.
//!
//! ## Loading Rules
//!
//! Documents go through the same checks as interactive edits:
//!
//! 1. **Layout**: zero sensors or zero areas is rejected
//! 2. **Defaults**: every field must be `>= 0`
//! 3. **Overrides**: sensor IDs must exist, thresholds must be `>= 0`, and a
//!    sensor may appear at most once
//! 4. **Reconciliation**: an override equal to the defaults is dropped, so
//!    the loaded sensor sits in `Default` state
//!
//! Loading is all-or-nothing: a single bad entry rejects the document.
//!
//! ## Usage Example
//!
//! ```rust
//! use vibewatch_schemas::MonitorConfig;
//! use vibewatch_core::{SensorId, ThresholdState};
//!
//! let config = MonitorConfig::from_json(r#"{
//!     "total_sensors": 64,
//!     "area_count": 4,
//!     "overrides": [
//!         { "sensor": 7, "thresholds": { "x": 0.9, "y": 0.9, "z": 2.0, "voltage": 2.8 } }
//!     ]
//! }"#)?;
//!
//! let evaluator = config.build_evaluator()?;
//! assert_eq!(evaluator.network().area_count(), 4);
//! assert_eq!(evaluator.state(SensorId::new(7))?, ThresholdState::Customized);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use vibewatch_core::MonitorError;

pub mod config;
pub mod snapshot;

pub use config::{MonitorConfig, OverrideEntry};
pub use snapshot::OverrideSnapshot;

#[doc(no_inline)]
pub use vibewatch_core::ThresholdEvaluator;

/// Configuration document errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse document: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::ParseError(err.to_string())
    }
}

/// Result type for document operations
pub type SchemaResult<T> = Result<T, SchemaError>;
