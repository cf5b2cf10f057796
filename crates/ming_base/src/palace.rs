//! The nine palaces of the Luo Shu grid and their life topics.
//!
//! ```text
//!   4 SE   9 S    2 SW
//!   3 E    5 C    7 W
//!   8 NE   1 N    6 NW
//! ```

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// A Luo Shu palace, numbered 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Palace {
    Kan,
    Kun,
    Zhen,
    Xun,
    Center,
    Qian,
    Dui,
    Gen,
    Li,
}

/// All 9 palaces in number order (index 0 = palace 1).
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Center,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// The eight outer palaces, which carry a deity.
pub const OUTER_PALACES: [Palace; 8] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

impl Palace {
    /// Luo Shu number 1..=9.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 9 {
            Some(ALL_PALACES[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Trigram name (Center for palace 5).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "Kan",
            Self::Kun => "Kun",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Center => "Center",
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Gen => "Gen",
            Self::Li => "Li",
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Kan => '坎',
            Self::Kun => '坤',
            Self::Zhen => '震',
            Self::Xun => '巽',
            Self::Center => '中',
            Self::Qian => '乾',
            Self::Dui => '兌',
            Self::Gen => '艮',
            Self::Li => '離',
        }
    }

    pub const fn direction(self) -> &'static str {
        match self {
            Self::Kan => "N",
            Self::Kun => "SW",
            Self::Zhen => "E",
            Self::Xun => "SE",
            Self::Center => "Center",
            Self::Qian => "NW",
            Self::Dui => "W",
            Self::Gen => "NE",
            Self::Li => "S",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Kan => Element::Water,
            Self::Kun | Self::Center | Self::Gen => Element::Earth,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
        }
    }

    pub const fn topic(self) -> Topic {
        ALL_TOPICS[self as usize]
    }

    /// Palace 5 has no deity slot.
    pub const fn has_deity(self) -> bool {
        !matches!(self, Self::Center)
    }
}

impl std::fmt::Display for Palace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.number(), self.name(), self.glyph())
    }
}

/// User-facing life topic bound 1:1 to a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Career,
    Relations,
    Health,
    Wealth,
    #[serde(rename = "Self")]
    SelfTopic,
    Mentor,
    Children,
    Knowledge,
    Fame,
}

/// All 9 topics in palace order.
pub const ALL_TOPICS: [Topic; 9] = [
    Topic::Career,
    Topic::Relations,
    Topic::Health,
    Topic::Wealth,
    Topic::SelfTopic,
    Topic::Mentor,
    Topic::Children,
    Topic::Knowledge,
    Topic::Fame,
];

impl Topic {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Relations => "Relations",
            Self::Health => "Health",
            Self::Wealth => "Wealth",
            Self::SelfTopic => "Self",
            Self::Mentor => "Mentor",
            Self::Children => "Children",
            Self::Knowledge => "Knowledge",
            Self::Fame => "Fame",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Career => "Job, business, life path",
            Self::Relations => "Marriage, partnerships",
            Self::Health => "Health, family, new starts",
            Self::Wealth => "Money, investments",
            Self::SelfTopic => "General, yourself",
            Self::Mentor => "Helpful people, travel",
            Self::Children => "Creativity, joy, projects",
            Self::Knowledge => "Education, skills",
            Self::Fame => "Recognition, reputation",
        }
    }

    pub const fn palace(self) -> Palace {
        ALL_PALACES[self as usize]
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(s: &str) -> Option<Self> {
        let t = s.trim();
        ALL_TOPICS.into_iter().find(|x| x.name().eq_ignore_ascii_case(t))
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
