//! I2C register bus adapter
//!
//! Implements `RegisterBus` on top of any blocking `embedded_hal::i2c::I2c`.
//! Reads use `write_read` so register selection and data transfer share one
//! transaction (repeated start).

use embedded_hal::i2c::I2c;

use crate::ports::RegisterBus;

/// `RegisterBus` over a blocking embedded-hal I2C bus
pub struct I2cRegisterBus<I> {
    i2c: I,
}

impl<I: I2c> I2cRegisterBus<I> {
    pub const fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> RegisterBus for I2cRegisterBus<I> {
    type Error = I::Error;

    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(device, &[register], &mut buf)?;
        Ok(buf[0])
    }

    fn read_word(&mut self, device: u8, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(device, &[register], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(device, &[register, value])
    }
}
