//! Error types for table lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A glyph or name that matches no entry in the relevant table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    UnknownElement(String),
    UnknownStem(String),
    UnknownBranch(String),
    UnknownStar(String),
    UnknownDoor(String),
    UnknownDeity(String),
    /// Stem and branch of different polarity never form a cycle pair.
    MismatchedPillar { stem: char, branch: char },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownElement(s) => write!(f, "unknown element: {s:?}"),
            Self::UnknownStem(s) => write!(f, "unknown stem: {s:?}"),
            Self::UnknownBranch(s) => write!(f, "unknown branch: {s:?}"),
            Self::UnknownStar(s) => write!(f, "unknown star: {s:?}"),
            Self::UnknownDoor(s) => write!(f, "unknown door: {s:?}"),
            Self::UnknownDeity(s) => write!(f, "unknown deity: {s:?}"),
            Self::MismatchedPillar { stem, branch } => {
                write!(f, "{stem}{branch} is not a sexagenary pair (polarity differs)")
            }
        }
    }
}

impl Error for ParseError {}
