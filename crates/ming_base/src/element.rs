//! Five elements (Wu Xing), polarity, and the production/control cycles.
//!
//! Production: Wood -> Fire -> Earth -> Metal -> Water -> Wood.
//! Control:    Wood -> Earth, Fire -> Metal, Earth -> Water, Metal -> Wood, Water -> Fire.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in production-cycle order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }

    /// 0-based index in production order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element for an index; wraps modulo 5.
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    /// The element this one produces (feeds).
    pub const fn produces(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that produces this one.
    pub const fn produced_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one controls (overcomes).
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = ParseError;

    /// Accepts the English name (any case) or the single Chinese glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(t) || t.chars().eq([e.glyph()]))
            .ok_or_else(|| ParseError::UnknownElement(s.to_string()))
    }
}

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    /// Even cycle indices are Yang, odd are Yin.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Auspiciousness carried by stars, doors and deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Auspicious,
    Neutral,
    Inauspicious,
}

impl Nature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "Auspicious",
            Self::Neutral => "Neutral",
            Self::Inauspicious => "Inauspicious",
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_cycle() {
        assert_eq!(Element::Wood.produces(), Element::Fire);
        assert_eq!(Element::Fire.produces(), Element::Earth);
        assert_eq!(Element::Earth.produces(), Element::Metal);
        assert_eq!(Element::Metal.produces(), Element::Water);
        assert_eq!(Element::Water.produces(), Element::Wood);
    }

    #[test]
    fn control_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        assert_eq!(Element::Water.controls(), Element::Fire);
    }

    #[test]
    fn inverse_relations() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.produces().produced_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn parse_name_and_glyph() {
        assert_eq!("metal".parse::<Element>(), Ok(Element::Metal));
        assert_eq!("水".parse::<Element>(), Ok(Element::Water));
        assert!("Aether".parse::<Element>().is_err());
        assert!("水水".parse::<Element>().is_err());
    }

    #[test]
    fn parity_to_polarity() {
        assert_eq!(Polarity::from_parity(0), Polarity::Yang);
        assert_eq!(Polarity::from_parity(7), Polarity::Yin);
    }
}
