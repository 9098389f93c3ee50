//! Fixed-Size Alarm History
//!
//! ## Overview
//!
//! The alarm history table lists recent alarms across all areas: when,
//! which sensor, which area, which channel, and the measured value. This
//! module keeps those rows in a ring buffer sized at compile time, so the
//! history costs the same memory after a week of alarms as after one.
//!
//! ## Recording
//!
//! [`AlarmHistory::record`] takes the status row produced by
//! [`crate::ThresholdEvaluator::evaluate`] and appends one [`AlarmRecord`]
//! per exceeded channel, in X, Y, Z, Voltage order. Normal rows are ignored.
//! When full, the oldest record is overwritten.
//!
//! ```text
//! AlarmHistory<4> after 6 records:
//! ┌─────┬─────┬─────┬─────┐
//! │  r4 │  r5 │  r2 │  r3 │   physical slots
//! └─────┴─────┴─────┴─────┘
//!              ↑
//!              └── write_pos = 2 (oldest surviving record)
//!
//! recent(): r5, r4, r3, r2
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vibewatch_core::{AlarmHistory, Reading, SensorId, ThresholdEvaluator};
//!
//! let evaluator = ThresholdEvaluator::standard();
//! let mut history = AlarmHistory::<16>::new();
//!
//! let row = evaluator.evaluate(SensorId::new(42), Reading::new(0.8, 0.7, 1.0, 3.3))?;
//! assert_eq!(history.record(&row, 1_000), 2);
//!
//! let newest = history.latest().unwrap();
//! assert_eq!(newest.sensor.to_string(), "Sensor-042");
//! # Ok::<(), vibewatch_core::MonitorError>(())
//! ```

use core::fmt;

use crate::classify::Channel;
use crate::constants::thresholds::DEFAULT_HISTORY_CAPACITY;
use crate::evaluator::SensorStatus;
use crate::partition::{AreaId, SensorId};

/// Milliseconds since the Unix epoch (or device boot), supplied by the caller
pub type Timestamp = u64;

/// One row of the alarm history: a single exceeded channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlarmRecord {
    /// When the alarm was observed (ms)
    pub timestamp: Timestamp,
    /// Sensor that raised the alarm
    pub sensor: SensorId,
    /// Area the sensor is installed in
    pub area: AreaId,
    /// Channel that crossed its bound
    pub channel: Channel,
    /// Measured value that crossed the bound
    pub value: f32,
    /// Bound in force at the time
    pub limit: f32,
}

impl fmt::Display for AlarmRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {} alarm: {:.3} {} (limit {:.3})",
            self.timestamp,
            self.sensor,
            self.area,
            self.channel,
            self.value,
            self.channel.unit(),
            self.limit,
        )
    }
}

/// Ring buffer of the last `N` alarm records
#[derive(Debug, Clone)]
pub struct AlarmHistory<const N: usize> {
    data: [Option<AlarmRecord>; N],
    /// Next slot to write; wraps to 0 at N
    write_pos: usize,
    len: usize,
}

/// History with the default capacity
pub type DefaultAlarmHistory = AlarmHistory<DEFAULT_HISTORY_CAPACITY>;

impl<const N: usize> AlarmHistory<N> {
    /// Empty history
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Append a single record, overwriting the oldest when full
    pub fn push(&mut self, record: AlarmRecord) {
        if N == 0 {
            return;
        }

        self.data[self.write_pos] = Some(record);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Append one record per exceeded channel of `status`
    ///
    /// Returns how many records were appended (0 for a normal reading).
    pub fn record(&mut self, status: &SensorStatus, timestamp: Timestamp) -> usize {
        let channels = status.classification.status.channels();
        for &channel in channels {
            self.push(AlarmRecord {
                timestamp,
                sensor: status.sensor,
                area: status.area,
                channel,
                value: status.reading.value(channel),
                limit: channel.limit(&status.thresholds),
            });
        }
        channels.len()
    }

    /// Records currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing was recorded yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once every slot holds a record
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of records kept
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&AlarmRecord> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Records oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &AlarmRecord> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Records newest to oldest, the order the history table shows
    pub fn recent(&self) -> impl Iterator<Item = &AlarmRecord> + '_ {
        self.iter().rev()
    }

    /// Records for one sensor, newest first
    pub fn for_sensor(&self, sensor: SensorId) -> impl Iterator<Item = &AlarmRecord> + '_ {
        self.recent().filter(move |r| r.sensor == sensor)
    }

    /// Records for one area, newest first
    pub fn for_area(&self, area: AreaId) -> impl Iterator<Item = &AlarmRecord> + '_ {
        self.recent().filter(move |r| r.area == area)
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.data = [None; N];
        self.write_pos = 0;
        self.len = 0;
    }

    /// Record by logical index (0 = oldest)
    fn get(&self, index: usize) -> Option<&AlarmRecord> {
        if index >= self.len {
            return None;
        }

        let actual = if self.len < N {
            index
        } else {
            // Full: oldest sits at write_pos
            (self.write_pos + index) % N
        };

        self.data[actual].as_ref()
    }
}

impl<const N: usize> Default for AlarmHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}
