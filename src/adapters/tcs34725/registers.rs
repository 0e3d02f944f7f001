//! TCS34725 Register Definitions
//!
//! Register offsets, bit masks and the fixed configuration values written
//! during initialization. Every register access on this chip family goes
//! through the command register: the register-select byte is
//! `COMMAND_BIT | offset`.

// =============================================================================
// I2C Address
// =============================================================================

/// TCS34725 I2C address (fixed in silicon)
pub const TCS34725_ADDR: u8 = 0x29;

/// Command register select bit, set on every register-select byte
pub const COMMAND_BIT: u8 = 0x80;

/// Register-select byte for `offset`
#[inline]
pub const fn command(offset: u8) -> u8 {
    COMMAND_BIT | offset
}

// =============================================================================
// Register Offsets
// =============================================================================

/// Enable register (power, ADC, interrupt enable)
pub const ENABLE: u8 = 0x00;

/// RGBC integration time (ATIME)
pub const ATIME: u8 = 0x01;

/// Control register, analog gain
pub const CONTROL: u8 = 0x0F;

/// Device ID
pub const ID: u8 = 0x12;

/// Device status
pub const STATUS: u8 = 0x13;

/// Clear channel data, low byte
pub const CDATAL: u8 = 0x14;

/// Red channel data, low byte
pub const RDATAL: u8 = 0x16;

/// Green channel data, low byte
pub const GDATAL: u8 = 0x18;

/// Blue channel data, low byte
pub const BDATAL: u8 = 0x1A;

/// Channel data registers in acquisition order. Clear must come first.
pub const CHANNEL_REGISTERS: [u8; 4] = [CDATAL, RDATAL, GDATAL, BDATAL];

// =============================================================================
// ENABLE Bits
// =============================================================================

/// Power on
pub const ENABLE_PON: u8 = 0x01;

/// RGBC ADC enable
pub const ENABLE_AEN: u8 = 0x02;

/// RGBC interrupt enable
pub const ENABLE_AIEN: u8 = 0x10;

// =============================================================================
// STATUS Bits
// =============================================================================

/// RGBC valid: an integration cycle has completed since AEN was set
pub const STATUS_AVALID: u8 = 0x01;

// =============================================================================
// Identity
// =============================================================================

/// ID register value of the TCS34725
pub const TCS34725_ID_VALUE: u8 = 0x44;

/// ID register value of the register-compatible sibling part
pub const TCS3472_COMPAT_ID_VALUE: u8 = 0x10;

// =============================================================================
// Fixed Configuration
// =============================================================================

/// ATIME value: 256 - 0xEB = 21 cycles of 2.4 ms (~50 ms integration)
pub const ATIME_VALUE: u8 = 0xEB;

/// CONTROL value: 4x gain
pub const GAIN_VALUE: u8 = 0x01;

/// Wait after PON before setting AEN (datasheet minimum is 2.4 ms)
pub const POWER_ON_DELAY_MS: u32 = 3;

/// Default wait after reading the channels, before the next integration lands
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 50;
