//! Sensor Network Layout
//!
//! The standard plant has 110 vibration sensors spread over 13 areas.
//! With floor division that gives 8 sensors per area and 14 in the last
//! one, which absorbs the remainder.

/// Number of vibration sensors in the standard network.
pub const TOTAL_SENSORS: u32 = 110;

/// Number of monitored areas in the standard network.
///
/// Areas are named `Area A` through `Area M`.
pub const AREA_COUNT: u32 = 13;

/// Prefix used when rendering sensor IDs (`Sensor-001`).
pub const SENSOR_ID_PREFIX: &str = "Sensor-";

/// Minimum digit count for rendered sensor IDs. Wider IDs print in full.
pub const SENSOR_ID_WIDTH: usize = 3;

/// Prefix used when rendering area names (`Area A`).
pub const AREA_NAME_PREFIX: &str = "Area ";

/// Letters available for single-letter area suffixes.
pub const AREA_ALPHABET_LEN: u32 = 26;
