//! TCS34725 Candy Sorter Library
//!
//! This library drives a TCS34725 RGBC color sensor over I2C and classifies
//! the candy in front of it. It follows a hexagonal architecture so the color
//! logic can be exercised without hardware.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - RawSample / ColorReading entities                             │
//! │  - normalized_channel, candy classifier and rule tables          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - RegisterBus: byte/word register access                        │
//! │  - ColorSensorPort: normalized channels and candy colors         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - I2cRegisterBus: embedded-hal blocking I2C                     │
//! │  - Tcs34725: sensor driver                                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Concurrency
//!
//! The driver is blocking and takes `&mut self`. Sharing one sensor between
//! threads or tasks requires an external mutex.
//!
//! # Features
//!
//! - `defmt`: `defmt::Format` on public types and defmt logging
//! - `embassy`: `Tcs34725::new_embassy` using `embassy_time::Delay`

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod logging;

/// Domain layer - pure color logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

// Re-export key domain types
pub use domain::{
    classify, normalized_channel, CandyColor, ColorReading, ColorRule, RawSample, CANDY_RULES,
    FIRST_BATCH_RULES,
};

// Re-export key port traits
pub use ports::{ColorSensorPort, RegisterBus, SensorError};

// Re-export adapters
pub use adapters::tcs34725::registers;
pub use adapters::{ChipId, I2cRegisterBus, Tcs34725, Tcs34725Config};
