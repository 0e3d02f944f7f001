//! Color sensor port - interface for RGBC light sensors
//!
//! This port defines how application code reads normalized color channels and
//! candy labels from a clear/red/green/blue light sensor. The TCS34725 is the
//! primary target.

use core::fmt;

use crate::domain::{CandyColor, ColorReading};

/// Port trait for RGBC color sensors
///
/// Every method performs a fresh acquisition; nothing is cached between
/// calls. Implementations initialize the device lazily on first use.
pub trait ColorSensorPort {
    /// Error returned when the device cannot be reached
    type Error;

    /// Acquire one sample and derive everything from it
    fn read(&mut self) -> Result<ColorReading, Self::Error>;

    /// Normalized red channel (0-255, may exceed 255 under noise)
    fn red(&mut self) -> Result<u32, Self::Error> {
        self.read().map(|reading| reading.red)
    }

    /// Normalized green channel
    fn green(&mut self) -> Result<u32, Self::Error> {
        self.read().map(|reading| reading.green)
    }

    /// Normalized blue channel
    fn blue(&mut self) -> Result<u32, Self::Error> {
        self.read().map(|reading| reading.blue)
    }

    /// Raw clear channel, at least 1
    fn clear(&mut self) -> Result<u16, Self::Error> {
        self.read().map(|reading| reading.clear())
    }

    /// Candy color of the current sample
    fn color(&mut self) -> Result<CandyColor, Self::Error> {
        self.read().map(|reading| reading.color)
    }

    /// Check if the sensor is initialized and ready
    fn is_ready(&self) -> bool;
}

/// Errors that can occur during color sensor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError<E> {
    /// Bus transaction failed
    Bus(E),
    /// Identity register held an unexpected value (device absent or wrong chip)
    NotDetected(u8),
}

impl<E> From<E> for SensorError<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

impl<E: fmt::Debug> fmt::Display for SensorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(error) => write!(f, "bus error: {error:?}"),
            Self::NotDetected(id) => write!(f, "unexpected chip id {id:#04x}"),
        }
    }
}
