//! Core monitoring logic for VibeWatch
//!
//! Decides which sensors belong to which area and whether a vibration
//! sensor's latest reading is in alarm. Everything here is deterministic:
//! readings come in from outside, verdicts go back out, and the only mutable
//! state is the per-sensor override store owned by the evaluator.
//!
//! Key constraints:
//! - No global state; callers hold the evaluator
//! - No heap allocation when classifying a reading
//! - Errors are returned, never logged away or clamped
//!
//! ```no_run
//! use vibewatch_core::{Reading, SensorId, ThresholdEvaluator};
//!
//! let evaluator = ThresholdEvaluator::standard();
//!
//! // Judge one table row
//! match evaluator.evaluate(SensorId::new(17), Reading::new(0.62, 0.04, 1.01, 3.29)) {
//!     Ok(row) => println!("{} {}", row.sensor, row.classification.status),
//!     Err(e) => println!("{e}"),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod classify;
pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod history;
pub mod overrides;
pub mod partition;
pub mod thresholds;
pub mod traits;

// Public API
pub use classify::{classify, AlarmStatus, Channel, ChannelList, Classification, Reading};
pub use errors::{MonitorError, MonitorResult, ThresholdField};
pub use evaluator::{SensorStatus, ThresholdEvaluator};
pub use history::{AlarmHistory, AlarmRecord, DefaultAlarmHistory, Timestamp};
pub use overrides::{effective_thresholds, OverrideOutcome, OverrideStore, ThresholdState};
pub use partition::{sensors_for_area, AreaId, SensorId, SensorNetwork, SensorRange};
pub use thresholds::ThresholdSet;
pub use traits::ReadingSource;

#[cfg(feature = "std")]
pub use evaluator::SharedEvaluator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
