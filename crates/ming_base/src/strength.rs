//! Component strength of a chart element inside a palace.
//!
//! A component (stem, star or door) is judged by how its element relates to
//! the host palace's element:
//!
//! | relation                     | label      | score |
//! |------------------------------|------------|-------|
//! | same element                 | Timely     | +2    |
//! | palace produces component    | Prosperous | +3    |
//! | palace controls component    | Confined   | -2    |
//! | component controls palace    | Dead       | -3    |
//! | component produces palace    | Resting    | 0     |

use serde::{Deserialize, Serialize};

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Timely,
    Prosperous,
    Resting,
    Confined,
    Dead,
    /// Sentinel for a component whose element is not known.
    Unknown,
}

pub const ALL_STRENGTHS: [Strength; 6] = [
    Strength::Timely,
    Strength::Prosperous,
    Strength::Resting,
    Strength::Confined,
    Strength::Dead,
    Strength::Unknown,
];

impl Strength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Timely => "Timely",
            Self::Prosperous => "Prosperous",
            Self::Resting => "Resting",
            Self::Confined => "Confined",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn score(self) -> i32 {
        match self {
            Self::Timely => 2,
            Self::Prosperous => 3,
            Self::Resting | Self::Unknown => 0,
            Self::Confined => -2,
            Self::Dead => -3,
        }
    }

    /// Plain-language `(label, advice)` pair.
    pub const fn friendly(self) -> (&'static str, &'static str) {
        match self {
            Self::Timely => ("High Energy", "Take Action!"),
            Self::Prosperous => ("Good Energy", "Favorable"),
            Self::Resting => ("Balanced", "Proceed Normally"),
            Self::Confined => ("Low Energy", "Be Patient"),
            Self::Dead => ("Rest Energy", "Wait & Reflect"),
            Self::Unknown => ("Unknown", "Assess Carefully"),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of a component element in a palace element.
pub const fn component_strength(component: Element, palace: Element) -> Strength {
    let c = component.index();
    if c == palace.index() {
        Strength::Timely
    } else if palace.produces().index() == c {
        Strength::Prosperous
    } else if palace.controls().index() == c {
        Strength::Confined
    } else if component.controls().index() == palace.index() {
        Strength::Dead
    } else {
        Strength::Resting
    }
}

/// As [`component_strength`], with a missing component element yielding
/// [`Strength::Unknown`].
pub const fn component_strength_opt(component: Option<Element>, palace: Element) -> Strength {
    match component {
        Some(c) => component_strength(c, palace),
        None => Strength::Unknown,
    }
}
