//! Raw sample and reading domain entities
//!
//! A `RawSample` is what the sensor latched during one integration period.
//! A `ColorReading` is everything derived from one such sample.

use crate::domain::classify::CandyColor;
use crate::domain::normalize::normalized_channel;

/// Accumulated light counts for the four photodiode channels.
///
/// Always replaced as a whole. The clear channel is clamped to at least 1
/// when a sample is built from bus data, so normalization never divides by
/// zero. The default sample is dark: zero counts with clear at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Clear (unfiltered) channel
    pub clear: u16,
    /// Red-filtered channel
    pub red: u16,
    /// Green-filtered channel
    pub green: u16,
    /// Blue-filtered channel
    pub blue: u16,
}

impl RawSample {
    /// Build a sample from channel counts, clamping clear to a minimum of 1
    pub const fn new(clear: u16, red: u16, green: u16, blue: u16) -> Self {
        Self {
            clear: if clear == 0 { 1 } else { clear },
            red,
            green,
            blue,
        }
    }

    /// Red as a share of clear on a 0-255 scale
    pub fn normalized_red(&self) -> u32 {
        normalized_channel(self.red, self.clear)
    }

    /// Green as a share of clear on a 0-255 scale
    pub fn normalized_green(&self) -> u32 {
        normalized_channel(self.green, self.clear)
    }

    /// Blue as a share of clear on a 0-255 scale
    pub fn normalized_blue(&self) -> u32 {
        normalized_channel(self.blue, self.clear)
    }

    /// Channels in acquisition order: clear, red, green, blue
    pub const fn channels(&self) -> [u16; 4] {
        [self.clear, self.red, self.green, self.blue]
    }
}

impl Default for RawSample {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Everything derived from a single acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorReading {
    /// The sample all other fields were computed from
    pub raw: RawSample,
    /// Normalized red (may exceed 255 when red > clear)
    pub red: u32,
    /// Normalized green
    pub green: u32,
    /// Normalized blue
    pub blue: u32,
    /// Candy color label
    pub color: CandyColor,
}

impl ColorReading {
    /// Derive a reading from `raw`, labelling it with the given color
    pub fn new(raw: RawSample, color: CandyColor) -> Self {
        Self {
            raw,
            red: raw.normalized_red(),
            green: raw.normalized_green(),
            blue: raw.normalized_blue(),
            color,
        }
    }

    /// Raw clear channel of the underlying sample
    pub const fn clear(&self) -> u16 {
        self.raw.clear
    }
}
