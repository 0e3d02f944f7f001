//! Ports (interfaces) defining the boundaries of the driver
//!
//! Ports are traits that define how the domain interacts with the outside
//! world. They let the driver run against real hardware or a test double.
//!
//! - **RegisterBus**: how register bytes move over the wire (I2C, mock)
//! - **ColorSensorPort**: how application code reads colors (TCS34725, mock)

pub mod color_sensor;
pub mod register_bus;

pub use color_sensor::{ColorSensorPort, SensorError};
pub use register_bus::RegisterBus;
