//! Seams between the core and the dashboard around it
//!
//! The core never acquires data itself. Whatever produces readings (a
//! simulator today, real telemetry later) plugs in through [`ReadingSource`].

use crate::classify::Reading;
use crate::partition::SensorId;

/// Produces the current reading for a sensor
pub trait ReadingSource {
    /// Sample `sensor` once
    fn read(&mut self, sensor: SensorId) -> Reading;
}

/// Any closure `FnMut(SensorId) -> Reading` is a reading source
impl<F> ReadingSource for F
where
    F: FnMut(SensorId) -> Reading,
{
    fn read(&mut self, sensor: SensorId) -> Reading {
        self(sensor)
    }
}
