//! Candy color classification
//!
//! A closed-set classifier for sorting candy by color. Rules are plain data:
//! each names a color and four strict bounds, one per raw channel. Rules are
//! evaluated in order and the first full match wins, so tables whose ranges
//! overlap depend on their ordering.

use crate::domain::RawSample;

/// Candy color label with its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CandyColor {
    /// No rule matched: empty slot, broken or discolored candy
    Blank = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    /// Reserved; never produced by the rule tables
    Unknown = 9,
}

impl CandyColor {
    /// Integer code (0-6, or 9 for `Unknown`)
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a label by its integer code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Blank),
            1 => Some(Self::Brown),
            2 => Some(Self::Red),
            3 => Some(Self::Orange),
            4 => Some(Self::Yellow),
            5 => Some(Self::Green),
            6 => Some(Self::Blue),
            9 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Lowercase name for display/logging
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Unknown => "unknown",
        }
    }
}

impl From<CandyColor> for u8 {
    fn from(color: CandyColor) -> Self {
        color.code()
    }
}

/// Strict inequality on a single raw channel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bound {
    /// value > threshold
    Above(u16),
    /// value < threshold
    Below(u16),
}

impl Bound {
    /// Whether `value` satisfies this bound
    #[inline]
    pub const fn admits(self, value: u16) -> bool {
        match self {
            Self::Above(threshold) => value > threshold,
            Self::Below(threshold) => value < threshold,
        }
    }
}

/// One row of a classification table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorRule {
    pub color: CandyColor,
    pub clear: Bound,
    pub red: Bound,
    pub green: Bound,
    pub blue: Bound,
}

impl ColorRule {
    pub const fn new(
        color: CandyColor,
        clear: Bound,
        red: Bound,
        green: Bound,
        blue: Bound,
    ) -> Self {
        Self {
            color,
            clear,
            red,
            green,
            blue,
        }
    }

    /// All four bounds hold for `sample`
    pub const fn matches(&self, sample: &RawSample) -> bool {
        self.clear.admits(sample.clear)
            && self.red.admits(sample.red)
            && self.green.admits(sample.green)
            && self.blue.admits(sample.blue)
    }
}

use Bound::{Above, Below};

/// Current sorter thresholds, in evaluation order.
pub const CANDY_RULES: [ColorRule; 6] = [
    ColorRule::new(CandyColor::Brown, Above(700), Above(230), Below(320), Below(260)),
    ColorRule::new(CandyColor::Red, Above(950), Above(450), Below(320), Below(300)),
    ColorRule::new(CandyColor::Orange, Above(1300), Above(700), Below(500), Below(400)),
    ColorRule::new(CandyColor::Yellow, Above(1600), Above(700), Above(600), Below(450)),
    ColorRule::new(CandyColor::Green, Above(1100), Below(450), Above(500), Below(400)),
    ColorRule::new(CandyColor::Blue, Below(1900), Below(350), Below(450), Above(380)),
];

/// Thresholds from the first sorter build, tuned for a dimmer feed chute.
pub const FIRST_BATCH_RULES: [ColorRule; 6] = [
    ColorRule::new(CandyColor::Brown, Below(670), Above(190), Below(240), Below(200)),
    ColorRule::new(CandyColor::Red, Above(700), Above(300), Below(260), Below(220)),
    ColorRule::new(CandyColor::Orange, Above(1000), Above(500), Below(330), Below(250)),
    ColorRule::new(CandyColor::Yellow, Above(1300), Above(600), Above(480), Below(290)),
    ColorRule::new(CandyColor::Green, Above(800), Below(280), Above(380), Below(270)),
    ColorRule::new(CandyColor::Blue, Below(800), Below(220), Below(320), Above(270)),
];

/// Classify `sample` against `rules`; first match wins, `Blank` otherwise.
pub fn classify(sample: &RawSample, rules: &[ColorRule]) -> CandyColor {
    rules
        .iter()
        .find(|rule| rule.matches(sample))
        .map_or(CandyColor::Blank, |rule| rule.color)
}
