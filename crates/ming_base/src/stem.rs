//! The ten Heavenly Stems (天干).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::ParseError;

/// A Heavenly Stem. Index 0 = Jia (甲) .. 9 = Gui (癸).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_GLYPHS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based cycle index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for any integer position in the 10-cycle.
    pub const fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    pub const fn glyph(self) -> char {
        STEM_GLYPHS[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    /// Stems pair up by element: 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Look up a stem by its glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        STEM_GLYPHS
            .iter()
            .position(|&g| g == c)
            .map(|i| ALL_STEMS[i])
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Stem {
    type Err = ParseError;

    /// Accepts the glyph (甲) or the pinyin (Jia, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Self::from_glyph(c) {
                return Ok(stem);
            }
        }
        ALL_STEMS
            .into_iter()
            .find(|st| st.pinyin().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownStem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_pair_up() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Yi.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Ren.polarity(), Polarity::Yang);
    }

    #[test]
    fn from_index_wraps_negative() {
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(23), Stem::Ding);
    }

    #[test]
    fn parse_glyph_or_pinyin() {
        assert_eq!("庚".parse::<Stem>(), Ok(Stem::Geng));
        assert_eq!("geng".parse::<Stem>(), Ok(Stem::Geng));
        assert_eq!(" Gui ".parse::<Stem>(), Ok(Stem::Gui));
        assert!("子".parse::<Stem>().is_err());
    }

    #[test]
    fn glyph_round_trip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_glyph(s.glyph()), Some(s));
        }
    }
}
