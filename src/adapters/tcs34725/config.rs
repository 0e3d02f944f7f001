//! TCS34725 driver configuration
//!
//! Gain and integration time are fixed by the sorter hardware and live in
//! `registers`. What remains tunable is timing around acquisition and the
//! classification table.

use super::registers::{
    DEFAULT_SETTLE_DELAY_MS, TCS34725_ADDR, TCS34725_ID_VALUE, TCS3472_COMPAT_ID_VALUE,
};
use crate::domain::{ColorRule, CANDY_RULES, FIRST_BATCH_RULES};

/// Chip identities accepted during initialization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipId {
    /// TCS34725 (ID 0x44)
    Tcs34725,
    /// Register-compatible sibling (ID 0x10)
    Compatible,
}

impl ChipId {
    /// Match an ID register value against the accepted identities
    pub const fn from_register(id: u8) -> Option<Self> {
        match id {
            TCS34725_ID_VALUE => Some(Self::Tcs34725),
            TCS3472_COMPAT_ID_VALUE => Some(Self::Compatible),
            _ => None,
        }
    }
}

/// TCS34725 driver configuration
#[derive(Clone, Copy, Debug)]
pub struct Tcs34725Config {
    /// I2C device address
    pub address: u8,
    /// Wait after each channel read-out (milliseconds)
    pub settle_delay_ms: u32,
    /// Set AIEN in ENABLE after each acquisition.
    ///
    /// Interrupts are never serviced by this driver; leave this off unless the
    /// INT line is wired to something that clears it.
    pub interrupt_toggle: bool,
    /// Classification rules, evaluated in order
    pub rules: &'static [ColorRule],
}

impl Default for Tcs34725Config {
    fn default() -> Self {
        Self {
            address: TCS34725_ADDR,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            interrupt_toggle: false,
            rules: &CANDY_RULES,
        }
    }
}

impl Tcs34725Config {
    /// Config using the first sorter build's thresholds
    pub fn first_batch() -> Self {
        Self {
            rules: &FIRST_BATCH_RULES,
            ..Self::default()
        }
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub const fn with_settle_delay_ms(mut self, settle_delay_ms: u32) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    pub const fn with_interrupt_toggle(mut self, enabled: bool) -> Self {
        self.interrupt_toggle = enabled;
        self
    }

    pub const fn with_rules(mut self, rules: &'static [ColorRule]) -> Self {
        self.rules = rules;
        self
    }
}
