//! The Nine Stars (九星).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Nature};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    Canopy,
    Grass,
    Impulse,
    Assistant,
    Connect,
    Heart,
    Pillar,
    Ren,
    Hero,
}

/// All 9 stars in their home-palace order (蓬 sits in palace 1).
pub const ALL_STARS: [Star; 9] = [
    Star::Canopy,
    Star::Grass,
    Star::Impulse,
    Star::Assistant,
    Star::Connect,
    Star::Heart,
    Star::Pillar,
    Star::Ren,
    Star::Hero,
];

const STAR_GLYPHS: [char; 9] = ['蓬', '芮', '沖', '輔', '禽', '心', '柱', '任', '英'];

impl Star {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn glyph(self) -> char {
        STAR_GLYPHS[self.index() as usize]
    }

    /// Full name, e.g. `"天蓬"`.
    pub fn chinese(self) -> String {
        format!("天{}", self.glyph())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Canopy => "Canopy",
            Self::Grass => "Grass",
            Self::Impulse => "Impulse",
            Self::Assistant => "Assistant",
            Self::Connect => "Connect",
            Self::Heart => "Heart",
            Self::Pillar => "Pillar",
            Self::Ren => "Ren",
            Self::Hero => "Hero",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Canopy => Element::Water,
            Self::Grass | Self::Connect | Self::Ren => Element::Earth,
            Self::Impulse | Self::Assistant => Element::Wood,
            Self::Heart | Self::Pillar => Element::Metal,
            Self::Hero => Element::Fire,
        }
    }

    pub const fn nature(self) -> Nature {
        match self {
            Self::Canopy | Self::Grass | Self::Pillar => Nature::Inauspicious,
            Self::Impulse => Nature::Neutral,
            _ => Nature::Auspicious,
        }
    }

    /// Accepts the bare glyph. The traditional 冲 and 辅 forms are folded in.
    pub fn from_glyph(c: char) -> Option<Self> {
        let c = match c {
            '冲' => '沖',
            '辅' => '輔',
            other => other,
        };
        STAR_GLYPHS
            .iter()
            .position(|&g| g == c)
            .map(|i| ALL_STARS[i])
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Star {
    type Err = ParseError;

    /// Accepts `蓬`, `天蓬` or `Canopy`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let glyph = t.strip_prefix('天').unwrap_or(t);
        let mut chars = glyph.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(star) = Self::from_glyph(c) {
                return Ok(star);
            }
        }
        ALL_STARS
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownStar(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes() {
        assert_eq!(Star::Canopy.element(), Element::Water);
        assert_eq!(Star::Canopy.nature(), Nature::Inauspicious);
        assert_eq!(Star::Hero.element(), Element::Fire);
        assert_eq!(Star::Impulse.nature(), Nature::Neutral);
        assert_eq!(Star::Heart.chinese(), "天心");
    }

    #[test]
    fn parse_forms() {
        assert_eq!("天英".parse::<Star>(), Ok(Star::Hero));
        assert_eq!("英".parse::<Star>(), Ok(Star::Hero));
        assert_eq!("assistant".parse::<Star>(), Ok(Star::Assistant));
        assert_eq!("冲".parse::<Star>(), Ok(Star::Impulse));
        assert!("天".parse::<Star>().is_err());
    }
}
