//! Error types for chart computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ming_base::ParseError;
use ming_time::TimeError;

/// Errors surfaced at the chart API boundary.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid or unparseable date/time.
    Time(TimeError),
    /// Unknown glyph or name.
    Parse(ParseError),
    /// Palace number outside 1..=9.
    InvalidPalace(u8),
    /// Chart text without three or four pillars.
    PillarCount(usize),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Parse(e) => write!(f, "lookup error: {e}"),
            Self::InvalidPalace(n) => write!(f, "invalid palace {n}: expected 1..=9"),
            Self::PillarCount(n) => write!(f, "expected 3 or 4 pillars, got {n}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::InvalidPalace(_) | Self::PillarCount(_) => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ParseError> for ChartError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
