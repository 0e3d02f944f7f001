//! Domain layer - pure color logic independent of the bus
//!
//! This module contains the sample entities, channel normalization and the
//! candy classifier. Nothing here touches hardware.

pub mod classify;
pub mod normalize;
pub mod sample;

pub use classify::{classify, Bound, CandyColor, ColorRule, CANDY_RULES, FIRST_BATCH_RULES};
pub use normalize::{normalized_channel, NORMALIZED_SCALE};
pub use sample::{ColorReading, RawSample};
