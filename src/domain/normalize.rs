//! Channel normalization
//!
//! Expresses a color channel as a proportion of total (clear) light on a
//! 0-255 scale: `round(channel / clear * 255)`, halves rounding up.

/// Full-scale value of a normalized channel when channel == clear
pub const NORMALIZED_SCALE: u32 = 255;

/// Normalize `channel` against `clear`.
///
/// `clear` is treated as at least 1. The result is not clamped: a channel
/// that reads higher than clear (sensor noise) yields values above 255.
///
/// Computed as `(2 * channel * 255 + clear) / (2 * clear)`, which is the
/// exact round-half-up of the rational value. Both operands fit in `u32`
/// for any pair of `u16` inputs.
///
/// Floating-point `round(channel / clear * 255)` can land just under an exact
/// half and round down, e.g. `(769, 6)` gives 32682 there and 32683 here.
#[inline]
pub fn normalized_channel(channel: u16, clear: u16) -> u32 {
    let clear = u32::from(clear.max(1));
    let channel = u32::from(channel);
    (2 * channel * NORMALIZED_SCALE + clear) / (2 * clear)
}
