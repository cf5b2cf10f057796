//! The Eight Doors (八門).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Nature};
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    Open,
    Rest,
    Life,
    Harm,
    Delusion,
    Scenery,
    Death,
    Fear,
}

pub const ALL_DOORS: [Door; 8] = [
    Door::Open,
    Door::Rest,
    Door::Life,
    Door::Harm,
    Door::Delusion,
    Door::Scenery,
    Door::Death,
    Door::Fear,
];

impl Door {
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => '開',
            Self::Rest => '休',
            Self::Life => '生',
            Self::Harm => '傷',
            Self::Delusion => '杜',
            Self::Scenery => '景',
            Self::Death => '死',
            Self::Fear => '驚',
        }
    }

    /// Full name, e.g. `"開門"`.
    pub fn chinese(self) -> String {
        format!("{}門", self.glyph())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Rest => "Rest",
            Self::Life => "Life",
            Self::Harm => "Harm",
            Self::Delusion => "Delusion",
            Self::Scenery => "Scenery",
            Self::Death => "Death",
            Self::Fear => "Fear",
        }
    }

    /// Softer display name: Death reads as Stillness, Fear as Surprise.
    pub const fn friendly_name(self) -> &'static str {
        match self {
            Self::Death => "Stillness",
            Self::Fear => "Surprise",
            other => other.name(),
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Open | Self::Fear => Element::Metal,
            Self::Rest => Element::Water,
            Self::Life | Self::Death => Element::Earth,
            Self::Harm | Self::Delusion => Element::Wood,
            Self::Scenery => Element::Fire,
        }
    }

    pub const fn nature(self) -> Nature {
        match self {
            Self::Open | Self::Rest | Self::Life => Nature::Auspicious,
            Self::Delusion | Self::Scenery => Nature::Neutral,
            Self::Harm | Self::Death | Self::Fear => Nature::Inauspicious,
        }
    }

    /// One-line guidance for a palace holding this door.
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Open => "Good time for new initiatives, meetings, and negotiations.",
            Self::Rest => "Favorable for recuperation, planning, and passive activities.",
            Self::Life => "Excellent for growth, investments, and new beginnings.",
            Self::Harm => "Avoid confrontations. Focus on self-improvement.",
            Self::Delusion => "Stay flexible. Things may not be as they appear.",
            Self::Scenery => "Good for creative work and public appearances.",
            Self::Death => "Time for reflection, not action. Wait for better timing.",
            Self::Fear => "Expect the unexpected. Stay alert and adaptable.",
        }
    }

    /// Accepts traditional glyphs and the simplified 开/伤/惊.
    pub fn from_glyph(c: char) -> Option<Self> {
        let c = match c {
            '开' => '開',
            '伤' => '傷',
            '惊' => '驚',
            other => other,
        };
        ALL_DOORS.into_iter().find(|d| d.glyph() == c)
    }
}

/// Guidance when no door occupies the palace.
pub const NO_DOOR_ADVICE: &str = "Assess the situation carefully before acting.";

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Door {
    type Err = ParseError;

    /// Accepts `開`, `開門`, `开`, `Open` or a friendly name like `Stillness`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let glyph = t
            .strip_suffix('門')
            .or_else(|| t.strip_suffix('门'))
            .unwrap_or(t);
        let mut chars = glyph.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = Self::from_glyph(c) {
                return Ok(d);
            }
        }
        ALL_DOORS
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(t) || d.friendly_name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownDoor(s.to_string()))
    }
}
