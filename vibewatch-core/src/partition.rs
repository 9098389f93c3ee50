//! Area Partitioning for the Sensor ID Space
//!
//! ## Overview
//!
//! Every sensor belongs to exactly one area. Membership is never stored per
//! sensor; it is recomputed from three numbers: the total sensor count, the
//! area count, and the area index. That keeps the live table, the graph
//! selector and the alarm history in agreement without any shared state.
//!
//! ## Assignment Rule
//!
//! ```text
//! base  = total_sensors / area_count          (floor division)
//! start = index * base + 1
//! end   = start + base - 1                    (every area but the last)
//! end   = total_sensors                       (last area)
//! ```
//!
//! The last area absorbs the remainder, so it holds
//! `base + total_sensors % area_count` sensors. For the standard network
//! (110 sensors, 13 areas):
//!
//! ```text
//! Area A  Sensor-001 ..= Sensor-008   (8)
//! Area B  Sensor-009 ..= Sensor-016   (8)
//! ...
//! Area L  Sensor-089 ..= Sensor-096   (8)
//! Area M  Sensor-097 ..= Sensor-110   (14)
//! ```
//!
//! When there are fewer sensors than areas, `base` is zero: every area but
//! the last is empty and the last one owns the whole network. That is a
//! direct consequence of the rule and is reproduced as-is.
//!
//! ## Usage
//!
//! ```rust
//! use vibewatch_core::partition::{sensors_for_area, SensorNetwork};
//!
//! let last = sensors_for_area(12, 110, 13)?;
//! assert_eq!(last.len(), 14);
//! assert_eq!(last.first().map(|s| s.get()), Some(97));
//!
//! let network = SensorNetwork::standard();
//! let area = network.area_of(vibewatch_core::SensorId::new(42))?;
//! assert_eq!(area.index(), 5);
//! # Ok::<(), vibewatch_core::MonitorError>(())
//! ```

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use thiserror_no_std::Error;

use crate::constants::network::{
    AREA_ALPHABET_LEN, AREA_COUNT, AREA_NAME_PREFIX, SENSOR_ID_PREFIX, SENSOR_ID_WIDTH,
    TOTAL_SENSORS,
};
use crate::errors::{MonitorError, MonitorResult};

/// Sensor identifier, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SensorId(u32);

impl SensorId {
    /// Wrap a raw sensor number. Range checks happen against a network.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw sensor number
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:0width$}", SENSOR_ID_PREFIX, self.0, width = SENSOR_ID_WIDTH)
    }
}

/// Failed to parse a `Sensor-NNN` label
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Not a sensor label (expected Sensor-NNN)")]
pub struct ParseSensorIdError;

impl FromStr for SensorId {
    type Err = ParseSensorIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(SENSOR_ID_PREFIX).ok_or(ParseSensorIdError)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseSensorIdError);
        }
        digits.parse().map(SensorId).map_err(|_| ParseSensorIdError)
    }
}

/// Area identifier, 0-based ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AreaId(u32);

impl AreaId {
    /// Wrap an area ordinal. Range checks happen against a network.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Ordinal position of the area
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Renders `Area A`, `Area B`, ... `Area Z`, `Area AA`, `Area AB`, ...
impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(AREA_NAME_PREFIX)?;

        // Bijective base-26: u32::MAX needs 7 letters
        let mut letters = [0u8; 7];
        let mut pos = letters.len();
        let mut n = u64::from(self.0) + 1;
        while n > 0 {
            n -= 1;
            pos -= 1;
            letters[pos] = b'A' + (n % u64::from(AREA_ALPHABET_LEN)) as u8;
            n /= u64::from(AREA_ALPHABET_LEN);
        }

        for &letter in &letters[pos..] {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Contiguous, inclusive range of sensors owned by one area
///
/// May be empty when the network has fewer sensors than areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorRange {
    start: u32,
    end: u32,
}

impl SensorRange {
    /// Number of sensors in the range
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    /// True when the area owns no sensors
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Lowest sensor in the range
    pub fn first(&self) -> Option<SensorId> {
        (!self.is_empty()).then_some(SensorId(self.start))
    }

    /// Highest sensor in the range
    pub fn last(&self) -> Option<SensorId> {
        (!self.is_empty()).then_some(SensorId(self.end))
    }

    /// Check whether a sensor falls inside the range
    pub fn contains(&self, sensor: SensorId) -> bool {
        self.start <= sensor.0 && sensor.0 <= self.end
    }

    /// Iterate sensors in ascending order
    pub fn iter(&self) -> SensorIter {
        SensorIter { inner: self.start..=self.end }
    }
}

impl IntoIterator for SensorRange {
    type Item = SensorId;
    type IntoIter = SensorIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &SensorRange {
    type Item = SensorId;
    type IntoIter = SensorIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the sensors of a [`SensorRange`]
#[derive(Debug, Clone)]
pub struct SensorIter {
    inner: RangeInclusive<u32>,
}

impl Iterator for SensorIter {
    type Item = SensorId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(SensorId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for SensorIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(SensorId)
    }
}

impl ExactSizeIterator for SensorIter {}

fn check_layout(total_sensors: u32, area_count: u32) -> MonitorResult<()> {
    let reason = if area_count == 0 {
        "area count must be positive"
    } else if total_sensors == 0 {
        "sensor count must be positive"
    } else {
        return Ok(());
    };

    Err(MonitorError::InvalidConfiguration { total_sensors, area_count, reason })
}

/// Sensors owned by area `area_index` in a network of `total_sensors`
/// sensors split over `area_count` areas.
///
/// Pure: the same inputs always give the same range.
pub fn sensors_for_area(
    area_index: u32,
    total_sensors: u32,
    area_count: u32,
) -> MonitorResult<SensorRange> {
    check_layout(total_sensors, area_count)?;

    if area_index >= area_count {
        return Err(MonitorError::InvalidConfiguration {
            total_sensors,
            area_count,
            reason: "area index out of range",
        });
    }

    let base = total_sensors / area_count;
    let start = area_index * base + 1;
    let end = if area_index == area_count - 1 {
        total_sensors
    } else {
        start + base - 1
    };

    Ok(SensorRange { start, end })
}

/// Validated network layout
///
/// Holds only the two counts; every query recomputes membership.
/// Deserializing goes through [`SensorNetwork::new`], so a decoded layout
/// is as valid as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawNetwork"))]
pub struct SensorNetwork {
    total_sensors: u32,
    area_count: u32,
}

/// Unchecked wire form of [`SensorNetwork`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawNetwork {
    total_sensors: u32,
    area_count: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawNetwork> for SensorNetwork {
    type Error = MonitorError;

    fn try_from(raw: RawNetwork) -> MonitorResult<Self> {
        Self::new(raw.total_sensors, raw.area_count)
    }
}

impl Default for SensorNetwork {
    fn default() -> Self {
        Self::standard()
    }
}

impl SensorNetwork {
    /// Create a layout, rejecting zero sensors or zero areas
    pub fn new(total_sensors: u32, area_count: u32) -> MonitorResult<Self> {
        check_layout(total_sensors, area_count)?;
        Ok(Self { total_sensors, area_count })
    }

    /// Standard plant layout: 110 sensors over 13 areas
    pub const fn standard() -> Self {
        Self {
            total_sensors: TOTAL_SENSORS,
            area_count: AREA_COUNT,
        }
    }

    /// Total sensors in the network
    pub const fn total_sensors(&self) -> u32 {
        self.total_sensors
    }

    /// Number of areas
    pub const fn area_count(&self) -> u32 {
        self.area_count
    }

    /// Re-run the layout checks of [`SensorNetwork::new`]
    pub fn validate(&self) -> MonitorResult<()> {
        check_layout(self.total_sensors, self.area_count)
    }

    /// Look up an area by ordinal
    pub fn area(&self, index: u32) -> MonitorResult<AreaId> {
        if index < self.area_count {
            Ok(AreaId(index))
        } else {
            Err(MonitorError::InvalidConfiguration {
                total_sensors: self.total_sensors,
                area_count: self.area_count,
                reason: "area index out of range",
            })
        }
    }

    /// All areas in ordinal order
    pub fn areas(&self) -> impl Iterator<Item = AreaId> {
        (0..self.area_count).map(AreaId)
    }

    /// Sensors owned by `area`
    pub fn sensors_for_area(&self, area: AreaId) -> MonitorResult<SensorRange> {
        sensors_for_area(area.0, self.total_sensors, self.area_count)
    }

    /// Number of sensors owned by `area`
    pub fn area_size(&self, area: AreaId) -> MonitorResult<usize> {
        self.sensors_for_area(area).map(|range| range.len())
    }

    /// Every area paired with its sensor count, for the area overview
    pub fn summary(&self) -> impl Iterator<Item = (AreaId, usize)> + '_ {
        self.areas().map(move |area| {
            let size = self.sensors_for_area(area).map(|r| r.len()).unwrap_or(0);
            (area, size)
        })
    }

    /// Check whether a sensor ID belongs to this network
    pub fn contains(&self, sensor: SensorId) -> bool {
        (1..=self.total_sensors).contains(&sensor.0)
    }

    /// Reject sensor IDs outside `[1, total_sensors]`
    pub fn check_sensor(&self, sensor: SensorId) -> MonitorResult<()> {
        if self.contains(sensor) {
            Ok(())
        } else {
            Err(MonitorError::UnknownSensor {
                sensor: sensor.0,
                total_sensors: self.total_sensors,
            })
        }
    }

    /// Area that owns `sensor`
    ///
    /// Inverse of [`SensorNetwork::sensors_for_area`]: sensors past the last
    /// full block land in the last area.
    pub fn area_of(&self, sensor: SensorId) -> MonitorResult<AreaId> {
        self.check_sensor(sensor)?;

        let last = self.area_count - 1;
        let base = self.total_sensors / self.area_count;
        if base == 0 {
            return Ok(AreaId(last));
        }

        Ok(AreaId(((sensor.0 - 1) / base).min(last)))
    }
}
