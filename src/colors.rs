//! Named colors of the red/green module.
//!
//! The module only has two emitters, so every color is a mix of red and
//! green. Conversions to and from `palette::Srgb<u8>` are provided for code
//! that already works in RGB; blue is always dropped.

use crate::types::DutyPair;
use palette::Srgb;

/// The closed set of named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Off,
    Red,
    Green,
    /// Red and green at full brightness.
    Yellow,
    /// Full red with a little green.
    Orange,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 5] = [
        Color::Off,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
    ];

    /// Returns the fixed brightness pair for this color.
    #[inline]
    pub const fn duty_pair(self) -> DutyPair {
        match self {
            Color::Off => DutyPair::new(0, 0),
            Color::Red => DutyPair::new(255, 0),
            Color::Green => DutyPair::new(0, 255),
            Color::Yellow => DutyPair::new(255, 255),
            Color::Orange => DutyPair::new(255, 80),
        }
    }

    /// Upper-case name used in progress lines.
    pub const fn label(self) -> &'static str {
        match self {
            Color::Off => "OFF",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Orange => "ORANGE",
        }
    }

    /// Returns the color as an sRGB value with no blue component.
    #[inline]
    pub fn to_srgb(self) -> Srgb<u8> {
        self.duty_pair().into()
    }
}

/// Resolves a named color to its brightness pair.
#[inline]
pub const fn resolve(color: Color) -> DutyPair {
    color.duty_pair()
}

impl From<Color> for DutyPair {
    fn from(color: Color) -> Self {
        color.duty_pair()
    }
}

impl From<DutyPair> for Srgb<u8> {
    fn from(pair: DutyPair) -> Self {
        Srgb::new(pair.red, pair.green, 0)
    }
}

impl From<Srgb<u8>> for DutyPair {
    fn from(color: Srgb<u8>) -> Self {
        DutyPair::new(color.red, color.green)
    }
}
