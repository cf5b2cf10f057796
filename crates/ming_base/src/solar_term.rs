//! The 24 solar terms (節氣), approximated from the civil calendar.
//!
//! True terms follow the Sun's ecliptic longitude in 15 degree steps. Here a
//! term is picked by calendar half-month, and the month-opening terms (節)
//! use a fixed day per month. Both are good to a day or so in the 20th and
//! 21st centuries.

use serde::{Deserialize, Serialize};

/// A solar term, 0 = Minor Cold (小寒, early January) .. 23 = Winter Solstice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolarTerm(u8);

const TERM_GLYPHS: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至",
    "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

const TERM_NAMES: [&str; 24] = [
    "Minor Cold",
    "Major Cold",
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
];

/// Day of each civil month (Jan..Dec) on which its opening term falls.
/// The month pillar changes branch on this day.
pub const MONTH_BOUNDARY_DAYS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Start of Spring (立春), the traditional year boundary.
pub const LICHUN: (u32, u32) = (2, 4);

impl SolarTerm {
    /// Term for an index; wraps modulo 24.
    pub const fn from_index(i: u8) -> Self {
        Self(i % 24)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn glyph(self) -> &'static str {
        TERM_GLYPHS[self.0 as usize]
    }

    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.0 as usize]
    }

    /// Approximate term in effect on a civil (month, day): first half of the
    /// month gives its first term, day 16 onward the second.
    pub const fn approximate(month: u32, day: u32) -> Self {
        let m = if month >= 1 && month <= 12 { month } else { 1 };
        let half = if day > 15 { 1 } else { 0 };
        Self::from_index((((m - 1) * 2 + half) % 24) as u8)
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.glyph(), self.name())
    }
}

/// Boundary day of a civil month (1..=12); out-of-range months clamp into range.
pub const fn month_boundary_day(month: u32) -> u32 {
    let m = if month >= 1 && month <= 12 { month } else { 1 };
    MONTH_BOUNDARY_DAYS[(m - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_halves() {
        assert_eq!(SolarTerm::approximate(1, 5).glyph(), "小寒");
        assert_eq!(SolarTerm::approximate(1, 15).glyph(), "小寒");
        assert_eq!(SolarTerm::approximate(1, 16).glyph(), "大寒");
    }

    #[test]
    fn december_second_half_is_winter_solstice() {
        assert_eq!(SolarTerm::approximate(12, 25).glyph(), "冬至");
        assert_eq!(SolarTerm::approximate(12, 25).index(), 23);
    }

    #[test]
    fn lichun_boundary() {
        assert_eq!(month_boundary_day(LICHUN.0), LICHUN.1);
        assert_eq!(SolarTerm::approximate(2, 4).name(), "Start of Spring");
    }
}
