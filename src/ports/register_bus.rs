//! Register bus port - byte-level access to I2C register devices
//!
//! The driver never talks to an I2C peripheral directly. It goes through this
//! port, which knows how to select a register and move one or two bytes.
//! Register numbers are passed through untouched: the caller is responsible
//! for any command or auto-increment bits the device expects.

/// Port for register-addressed bus devices
///
/// All operations block until the transaction completes. There is no timeout
/// at this layer; an adapter that needs one must add it itself.
///
/// # Example Implementation
///
/// ```ignore
/// struct FixedBus([u8; 32]);
///
/// impl RegisterBus for FixedBus {
///     type Error = core::convert::Infallible;
///
///     fn read_byte(&mut self, _device: u8, register: u8) -> Result<u8, Self::Error> {
///         Ok(self.0[(register & 0x1F) as usize])
///     }
///     // ...
/// }
/// ```
pub trait RegisterBus {
    /// Transport error surfaced to the driver
    type Error;

    /// Select `register`, then read one byte
    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error>;

    /// Select `register`, then read two bytes as a little-endian word
    fn read_word(&mut self, device: u8, register: u8) -> Result<u16, Self::Error>;

    /// Write `[register, value]` in a single transaction
    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error> {
        T::read_byte(self, device, register)
    }

    fn read_word(&mut self, device: u8, register: u8) -> Result<u16, Self::Error> {
        T::read_word(self, device, register)
    }

    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        T::write_byte(self, device, register, value)
    }
}
