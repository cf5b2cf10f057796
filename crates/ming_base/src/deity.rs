//! The Eight Deities (八神). Ten glyphs exist because Yang and Yin
//! arrangements swap 勾/雀 for 虎/玄.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Nature;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deity {
    Chief,
    Serpent,
    Moon,
    SixHarmony,
    Hook,
    Bird,
    Tiger,
    Emptiness,
    NineEarth,
    NineHeaven,
}

pub const ALL_DEITIES: [Deity; 10] = [
    Deity::Chief,
    Deity::Serpent,
    Deity::Moon,
    Deity::SixHarmony,
    Deity::Hook,
    Deity::Bird,
    Deity::Tiger,
    Deity::Emptiness,
    Deity::NineEarth,
    Deity::NineHeaven,
];

impl Deity {
    pub const fn glyph(self) -> char {
        match self {
            Self::Chief => '符',
            Self::Serpent => '蛇',
            Self::Moon => '陰',
            Self::SixHarmony => '合',
            Self::Hook => '勾',
            Self::Bird => '雀',
            Self::Tiger => '虎',
            Self::Emptiness => '玄',
            Self::NineEarth => '地',
            Self::NineHeaven => '天',
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Chief => "值符",
            Self::Serpent => "螣蛇",
            Self::Moon => "太陰",
            Self::SixHarmony => "六合",
            Self::Hook => "勾陳",
            Self::Bird => "朱雀",
            Self::Tiger => "白虎",
            Self::Emptiness => "玄武",
            Self::NineEarth => "九地",
            Self::NineHeaven => "九天",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Chief => "Chief",
            Self::Serpent => "Serpent",
            Self::Moon => "Moon",
            Self::SixHarmony => "Six Harmony",
            Self::Hook => "Hook",
            Self::Bird => "Bird",
            Self::Tiger => "Tiger",
            Self::Emptiness => "Emptiness",
            Self::NineEarth => "Nine Earth",
            Self::NineHeaven => "Nine Heaven",
        }
    }

    pub const fn nature(self) -> Nature {
        match self {
            Self::Chief | Self::Moon | Self::SixHarmony | Self::NineEarth | Self::NineHeaven => {
                Nature::Auspicious
            }
            Self::Emptiness => Nature::Neutral,
            Self::Serpent | Self::Hook | Self::Bird | Self::Tiger => Nature::Inauspicious,
        }
    }

    /// Area of life the deity governs.
    pub const fn function(self) -> &'static str {
        match self {
            Self::Chief => "Leadership, authority, protection",
            Self::Serpent => "Deception, anxiety, obstacles",
            Self::Moon => "Hidden support, secrets, intuition",
            Self::SixHarmony => "Relationships, partnerships, agreements",
            Self::Hook => "Entanglement, disputes, legal issues",
            Self::Bird => "Arguments, gossip, communication issues",
            Self::Tiger => "Violence, accidents, loss",
            Self::Emptiness => "Theft, deception, hidden matters",
            Self::NineEarth => "Stability, grounding, real estate",
            Self::NineHeaven => "Expansion, promotion, flying high",
        }
    }

    /// Accepts the short glyph; simplified 阴 folds into 陰.
    pub fn from_glyph(c: char) -> Option<Self> {
        let c = if c == '阴' { '陰' } else { c };
        ALL_DEITIES.into_iter().find(|d| d.glyph() == c)
    }
}

impl std::fmt::Display for Deity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deity {
    type Err = ParseError;

    /// Accepts the glyph (`符`), the full name (`值符`) or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = Self::from_glyph(c) {
                return Ok(d);
            }
        }
        ALL_DEITIES
            .into_iter()
            .find(|d| d.chinese() == t || d.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownDeity(s.to_string()))
    }
}
