//! Alarm Classification of Sensor Readings
//!
//! ## Overview
//!
//! A vibration node reports four values per sample: acceleration on three
//! axes and its own supply voltage. [`classify`] compares each value with the
//! sensor's [`ThresholdSet`] and produces a [`Classification`]: one flag per
//! channel plus an overall [`AlarmStatus`].
//!
//! ## Comparison Rules
//!
//! The operators are deliberately asymmetric:
//!
//! ```text
//! channel   alarm when              boundary value
//! X         reading.x >= limit      alarms
//! Y         reading.y >= limit      alarms
//! Z         reading.z >= limit      alarms
//! Voltage   reading.v <  floor      healthy
//! ```
//!
//! Vibration alarms trigger at or above a ceiling; the voltage alarm
//! triggers strictly below a floor. NaN compares false both ways, so a NaN
//! value never raises its channel.
//!
//! ## Status Order
//!
//! Exceeded channels are always listed X, Y, Z, Voltage, so the condensed
//! status string is stable between refreshes:
//!
//! ```rust
//! use vibewatch_core::{classify, Reading, ThresholdSet};
//!
//! let reading = Reading::new(0.7, 0.1, 1.0, 2.5);
//! let result = classify(&reading, &ThresholdSet::DEFAULT);
//!
//! assert!(result.x_exceeded);
//! assert!(result.voltage_under);
//! assert_eq!(result.status.to_string(), "Alarm (X,Voltage)");
//! ```

use core::fmt;

use heapless::Vec;

use crate::thresholds::ThresholdSet;

/// One of the four monitored values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    /// X-axis vibration
    X = 0,
    /// Y-axis vibration
    Y = 1,
    /// Z-axis vibration
    Z = 2,
    /// Supply voltage
    Voltage = 3,
}

impl Channel {
    /// All channels in reporting order
    pub const ALL: [Channel; 4] = [Channel::X, Channel::Y, Channel::Z, Channel::Voltage];

    /// Short label used in status strings
    pub const fn label(&self) -> &'static str {
        match self {
            Channel::X => "X",
            Channel::Y => "Y",
            Channel::Z => "Z",
            Channel::Voltage => "Voltage",
        }
    }

    /// Unit of the channel's values
    pub const fn unit(&self) -> &'static str {
        match self {
            Channel::X | Channel::Y | Channel::Z => "G",
            Channel::Voltage => "V",
        }
    }

    /// The bound in `thresholds` that governs this channel
    pub const fn limit(&self, thresholds: &ThresholdSet) -> f32 {
        match self {
            Channel::X => thresholds.x,
            Channel::Y => thresholds.y,
            Channel::Z => thresholds.z,
            Channel::Voltage => thresholds.voltage,
        }
    }

    /// Apply this channel's comparison rule to a single value
    pub fn is_alarm(&self, value: f32, limit: f32) -> bool {
        match self {
            Channel::X | Channel::Y | Channel::Z => value >= limit,
            Channel::Voltage => value < limit,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exceeded channels in reporting order
pub type ChannelList = Vec<Channel, 4>;

/// One sample from one sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// X-axis acceleration (G)
    pub x: f32,
    /// Y-axis acceleration (G)
    pub y: f32,
    /// Z-axis acceleration (G)
    pub z: f32,
    /// Supply voltage (V)
    pub voltage: f32,
}

impl Reading {
    /// Reading from the four channel values
    pub const fn new(x: f32, y: f32, z: f32, voltage: f32) -> Self {
        Self { x, y, z, voltage }
    }

    /// Value of a single channel
    pub const fn value(&self, channel: Channel) -> f32 {
        match channel {
            Channel::X => self.x,
            Channel::Y => self.y,
            Channel::Z => self.z,
            Channel::Voltage => self.voltage,
        }
    }
}

/// Overall verdict for a reading
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlarmStatus {
    /// Every channel within bounds
    Normal,
    /// At least one channel out of bounds
    Alarm(ChannelList),
}

impl AlarmStatus {
    /// True for `Alarm`
    pub fn is_alarm(&self) -> bool {
        matches!(self, AlarmStatus::Alarm(_))
    }

    /// Exceeded channels; empty for `Normal`
    pub fn channels(&self) -> &[Channel] {
        match self {
            AlarmStatus::Normal => &[],
            AlarmStatus::Alarm(channels) => channels,
        }
    }
}

/// Renders `Normal` or `Alarm (X,Y,...)`
impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlarmStatus::Normal => f.write_str("Normal"),
            AlarmStatus::Alarm(channels) => {
                f.write_str("Alarm (")?;
                for (i, channel) in channels.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(channel.label())?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Per-channel flags and overall status for one reading
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// `x >= limit`
    pub x_exceeded: bool,
    /// `y >= limit`
    pub y_exceeded: bool,
    /// `z >= limit`
    pub z_exceeded: bool,
    /// `voltage < floor`
    pub voltage_under: bool,
    /// Combined verdict
    pub status: AlarmStatus,
}

impl Classification {
    /// Flag for a single channel, used for cell highlighting
    pub const fn exceeded(&self, channel: Channel) -> bool {
        match channel {
            Channel::X => self.x_exceeded,
            Channel::Y => self.y_exceeded,
            Channel::Z => self.z_exceeded,
            Channel::Voltage => self.voltage_under,
        }
    }

    /// True when any channel is out of bounds
    pub fn is_alarm(&self) -> bool {
        self.status.is_alarm()
    }
}

/// Classify `reading` against `thresholds`
///
/// Pure and never cached: call it again for every refresh.
pub fn classify(reading: &Reading, thresholds: &ThresholdSet) -> Classification {
    let mut channels = ChannelList::new();
    for channel in Channel::ALL {
        if channel.is_alarm(reading.value(channel), channel.limit(thresholds)) {
            // Capacity equals Channel::ALL.len(), push cannot fail
            let _ = channels.push(channel);
        }
    }

    let has = |channel: Channel| channels.contains(&channel);
    let x_exceeded = has(Channel::X);
    let y_exceeded = has(Channel::Y);
    let z_exceeded = has(Channel::Z);
    let voltage_under = has(Channel::Voltage);

    let status = if channels.is_empty() {
        AlarmStatus::Normal
    } else {
        AlarmStatus::Alarm(channels)
    };

    Classification { x_exceeded, y_exceeded, z_exceeded, voltage_under, status }
}
