//! Sexagenary (Ganzhi, 干支) cycle arithmetic.
//!
//! A pillar pairs a stem with a branch of the same polarity; the 60 valid
//! pairs form one cycle starting at 甲子. The cycle index of a pair solves
//! `n = s (mod 10)`, `n = b (mod 12)`, which gives `n = (6s - 5b) mod 60`.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::ParseError;
use crate::stem::Stem;

/// Reference year whose year pillar is 甲子 (index 0).
pub const YEAR_EPOCH: i32 = 1984;

/// A Stem-Branch pair: one of Year, Month, Day or Hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair a stem and branch; rejects mixed polarity (e.g. 甲丑).
    pub fn try_new(stem: Stem, branch: Branch) -> Result<Self, ParseError> {
        if stem.polarity() != branch.polarity() {
            return Err(ParseError::MismatchedPillar {
                stem: stem.glyph(),
                branch: branch.glyph(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at any integer position of the 60-cycle.
    pub const fn from_cycle_index(n: i64) -> Self {
        let n = n.rem_euclid(60);
        Self {
            stem: Stem::from_index(n),
            branch: Branch::from_index(n),
        }
    }

    /// 0-based position in the 60-cycle (甲子 = 0, 癸亥 = 59).
    pub const fn cycle_index(&self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Glyph name, e.g. `"甲子"`.
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }

    /// Pinyin name, e.g. `"Jia-Zi"`.
    pub fn pinyin(&self) -> String {
        format!("{}-{}", self.stem.pinyin(), self.branch.pinyin())
    }

    /// Leader (旬首) of the ten-day decade this pillar belongs to; always a 甲 pillar.
    pub const fn xun_leader(&self) -> Self {
        let n = self.cycle_index() as i64;
        Self::from_cycle_index(n - n % 10)
    }

    /// The two branches (旬空) left unpaired in this pillar's decade.
    pub const fn void_branches(&self) -> [Branch; 2] {
        let lead = self.xun_leader().branch.index() as i64;
        [Branch::from_index(lead + 10), Branch::from_index(lead + 11)]
    }

    /// Year pillar of a civil year, counting from [`YEAR_EPOCH`].
    pub const fn of_year(year: i32) -> Self {
        Self::from_cycle_index((year - YEAR_EPOCH) as i64)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl std::str::FromStr for Pillar {
    type Err = ParseError;

    /// Two glyphs, e.g. `"庚午"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::UnknownStem(s.to_string()));
        };
        let stem = Stem::from_glyph(sc).ok_or_else(|| ParseError::UnknownStem(sc.to_string()))?;
        let branch =
            Branch::from_glyph(bc).ok_or_else(|| ParseError::UnknownBranch(bc.to_string()))?;
        Self::try_new(stem, branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jiazi_is_zero() {
        let p = Pillar::from_cycle_index(0);
        assert_eq!(p.name(), "甲子");
        assert_eq!(p.pinyin(), "Jia-Zi");
        assert_eq!(p.cycle_index(), 0);
    }

    #[test]
    fn guihai_is_last() {
        let p = Pillar::from_cycle_index(59);
        assert_eq!(p.name(), "癸亥");
        assert_eq!(Pillar::from_cycle_index(60), Pillar::from_cycle_index(0));
        assert_eq!(Pillar::from_cycle_index(-1), p);
    }

    #[test]
    fn cycle_index_inverts_from_cycle_index() {
        for n in 0..60 {
            assert_eq!(Pillar::from_cycle_index(n).cycle_index() as i64, n);
        }
    }

    #[test]
    fn mixed_polarity_rejected() {
        assert!(Pillar::try_new(Stem::Jia, Branch::Chou).is_err());
        assert!("甲丑".parse::<Pillar>().is_err());
        assert_eq!("庚午".parse::<Pillar>().map(|p| p.cycle_index()), Ok(6));
    }

    #[test]
    fn year_pillars() {
        assert_eq!(Pillar::of_year(1984).name(), "甲子");
        assert_eq!(Pillar::of_year(2024).name(), "甲辰");
        assert_eq!(Pillar::of_year(1900).name(), "庚子");
        assert_eq!(Pillar::of_year(1983).name(), "癸亥");
    }

    #[test]
    fn xun_and_void() {
        // 庚午 (6) belongs to the 甲子 decade, void 戌亥.
        let p: Pillar = "庚午".parse().unwrap();
        assert_eq!(p.xun_leader().name(), "甲子");
        assert_eq!(p.void_branches(), [Branch::Xu, Branch::Hai]);
        // 乙亥 (11) is in the 甲戌 decade, void 申酉.
        let q: Pillar = "乙亥".parse().unwrap();
        assert_eq!(q.xun_leader().name(), "甲戌");
        assert_eq!(q.void_branches(), [Branch::Shen, Branch::You]);
    }
}
