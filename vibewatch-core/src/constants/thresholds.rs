//! Default Alarm Limits
//!
//! Process-wide thresholds used for every sensor without an override.
//! Vibration limits are inclusive ceilings (a reading equal to the limit
//! alarms); the voltage floor is exclusive (a reading equal to the floor is
//! still healthy).

// ===== VIBRATION LIMITS =====

/// Default X-axis vibration limit (G).
///
/// Horizontal axes sit near 0 G at rest, so half a G is a clear fault.
pub const DEFAULT_X_LIMIT_G: f32 = 0.5;

/// Default Y-axis vibration limit (G).
pub const DEFAULT_Y_LIMIT_G: f32 = 0.5;

/// Default Z-axis vibration limit (G).
///
/// The vertical axis reads about 1 G from gravity alone.
pub const DEFAULT_Z_LIMIT_G: f32 = 2.0;

// ===== SUPPLY VOLTAGE =====

/// Default supply voltage floor (V).
///
/// Sensor nodes run from a nominal 3.3 V rail; below 2.8 V readings are
/// no longer trustworthy.
pub const DEFAULT_VOLTAGE_FLOOR_V: f32 = 2.8;

// ===== ALARM HISTORY =====

/// Number of alarm records kept in memory by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;
