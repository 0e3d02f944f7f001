//! TCS34725 RGBC Color Sensor Driver
//!
//! I2C driver for the ams TCS34725 (and register-compatible siblings) used as
//! the eye of a candy sorting machine.
//!
//! ## Features
//!
//! - Lazy initialization with identity check, retried until the chip answers
//! - Fixed integration time (0xEB) and 4x gain
//! - Clear/red/green/blue read-out, clear clamped to at least 1
//! - Normalized channels and candy color labels from each fresh sample
//!
//! ## Usage
//!
//! ```ignore
//! use tcs34725_sorter::{I2cRegisterBus, Tcs34725};
//!
//! let mut sensor = Tcs34725::new(I2cRegisterBus::new(i2c), delay);
//! let color = sensor.color()?;
//! ```

mod config;
mod driver;
pub mod registers;

pub use config::{ChipId, Tcs34725Config};
pub use driver::Tcs34725;

#[cfg(feature = "embassy")]
mod embassy {
    use embedded_hal::i2c::I2c;

    use super::Tcs34725;
    use crate::adapters::I2cRegisterBus;

    impl<I: I2c> Tcs34725<I2cRegisterBus<I>, embassy_time::Delay> {
        /// Create a driver on `i2c` that waits with `embassy_time::Delay`
        pub fn new_embassy(i2c: I) -> Self {
            Self::new(I2cRegisterBus::new(i2c), embassy_time::Delay)
        }
    }
}
