//! Adapters - concrete implementations of ports
//!
//! Adapters connect the domain to the outside world by implementing
//! the port traits.
//!
//! # Available Adapters
//!
//! - **i2c_bus**: `RegisterBus` over any blocking embedded-hal I2C bus
//! - **tcs34725**: TCS34725 RGBC color sensor driver

pub mod i2c_bus;
pub mod tcs34725;

pub use i2c_bus::I2cRegisterBus;
pub use tcs34725::{ChipId, Tcs34725, Tcs34725Config};
