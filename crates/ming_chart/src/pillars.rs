//! Four Pillars (四柱) from a civil date and optional hour.
//!
//! - Year: 60-cycle position counted from 1984 = 甲子.
//! - Month: branch from the month-opening term boundary, stem by the
//!   Five Tigers rule (五虎遁) from the solar year's stem.
//! - Day: 60-cycle position counted in whole days from 1900-01-01 = 甲戌.
//! - Hour: branch from the two-hour window, stem by the Five Rats rule
//!   (五鼠遁) from the day stem.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ming_base::{Branch, LICHUN, Pillar, Stem, month_boundary_day};
use ming_time::{CivilDate, CivilDateTime, JDN_1900_01_01};

use crate::error::ChartError;

/// Cycle index of the 1900-01-01 day pillar (甲戌).
pub const DAY_EPOCH_INDEX: i64 = 10;

/// Stem of the 寅 month for each year-stem group (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
const FIVE_TIGERS: [u8; 5] = [2, 4, 6, 8, 0];

/// Stem of the 子 hour for each day-stem group.
const FIVE_RATS: [u8; 5] = [0, 2, 4, 6, 8];

/// Where the year pillar turns over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearBoundary {
    /// January 1st.
    #[default]
    CivilNewYear,
    /// Start of Spring (立春), approximated as February 4th.
    LiChun,
}

/// Configuration for the pillar converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarConfig {
    pub year_boundary: YearBoundary,
}

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// A BaZi chart. `hour` is `None` when the birth time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// The Day Master: stem of the day pillar.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Known pillars in Year, Month, Day, Hour order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        [
            (PillarPosition::Year, Some(self.year)),
            (PillarPosition::Month, Some(self.month)),
            (PillarPosition::Day, Some(self.day)),
            (PillarPosition::Hour, self.hour),
        ]
        .into_iter()
        .filter_map(|(pos, p)| p.map(|p| (pos, p)))
    }

    /// Branches of every known pillar.
    pub fn branches(&self) -> Vec<Branch> {
        self.iter().map(|(_, p)| p.branch).collect()
    }

    pub fn hour_known(&self) -> bool {
        self.hour.is_some()
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.year, self.month, self.day)?;
        match self.hour {
            Some(h) => write!(f, " {h}"),
            None => write!(f, " ??"),
        }
    }
}

impl std::str::FromStr for FourPillars {
    type Err = ChartError;

    /// Whitespace-separated pillars in Year Month Day [Hour] order, e.g.
    /// `"甲子 丙午 庚寅 戊戌"`. A fourth field of `??` means unknown hour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let (year, month, day, hour) = match fields.as_slice() {
            [y, m, d] | [y, m, d, "??"] => (y, m, d, None),
            [y, m, d, h] => (y, m, d, Some(h.parse()?)),
            other => return Err(ChartError::PillarCount(other.len())),
        };
        Ok(Self {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour,
        })
    }
}

/// Year pillar for a civil date.
pub fn year_pillar(date: &CivilDate, config: &PillarConfig) -> Pillar {
    let year = match config.year_boundary {
        YearBoundary::CivilNewYear => date.year,
        YearBoundary::LiChun => solar_year(date),
    };
    Pillar::of_year(year)
}

/// Month pillar for a civil date.
///
/// The branch advances on each month's boundary day: February from the 4th
/// is 寅, January before the 6th is still 子. The Five Tigers stem is taken
/// from the solar year, so January always belongs to the previous cycle year.
pub fn month_pillar(date: &CivilDate) -> Pillar {
    let m = date.month as i64;
    let branch = if date.day >= month_boundary_day(date.month) {
        Branch::from_index(m)
    } else {
        Branch::from_index(m - 1)
    };
    let year_stem = Pillar::of_year(solar_year(date)).stem;
    let start = FIVE_TIGERS[(year_stem.index() % 5) as usize] as i64;
    let offset = (branch.index() as i64 - 2).rem_euclid(12);
    Pillar {
        stem: Stem::from_index(start + offset),
        branch,
    }
}

/// Day pillar from the whole-day count since 1900-01-01.
pub fn day_pillar(date: &CivilDate) -> Pillar {
    let days = date.jdn() - JDN_1900_01_01;
    Pillar::from_cycle_index(DAY_EPOCH_INDEX + days)
}

/// Hour pillar for a day stem and civil hour.
///
/// Hour 23 stays on the civil day it belongs to; the day pillar does not
/// roll forward at 23:00.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = Branch::from_hour(hour);
    let start = FIVE_RATS[(day_stem.index() % 5) as usize] as i64;
    Pillar {
        stem: Stem::from_index(start + branch.index() as i64),
        branch,
    }
}

/// Four Pillars for a date and an optional civil hour.
pub fn four_pillars(date: &CivilDate, hour: Option<u32>, config: &PillarConfig) -> FourPillars {
    let day = day_pillar(date);
    let pillars = FourPillars {
        year: year_pillar(date, config),
        month: month_pillar(date),
        day,
        hour: hour.map(|h| hour_pillar(day.stem, h)),
    };
    debug!(%date, ?hour, pillars = %pillars, "four pillars computed");
    pillars
}

/// Four Pillars for a full civil moment.
pub fn four_pillars_at(moment: &CivilDateTime, config: &PillarConfig) -> FourPillars {
    four_pillars(&moment.date(), Some(moment.hour), config)
}

/// Year in which the date falls when years start at 立春.
fn solar_year(date: &CivilDate) -> i32 {
    if date.is_before(LICHUN.0, LICHUN.1) {
        date.year - 1
    } else {
        date.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CivilDate {
        CivilDate::new(y, m, day)
    }

    #[test]
    fn day_epoch() {
        assert_eq!(day_pillar(&d(1900, 1, 1)).name(), "甲戌");
        assert_eq!(day_pillar(&d(1900, 1, 2)).name(), "乙亥");
    }

    #[test]
    fn known_days() {
        assert_eq!(day_pillar(&d(2000, 1, 1)).name(), "戊午");
        assert_eq!(day_pillar(&d(1949, 10, 1)).name(), "甲子");
    }

    #[test]
    fn day_cycle_repeats_every_sixty_days() {
        // 2024 is a leap year: Jan 31 + Feb 29 = 60 days.
        let start = day_pillar(&d(2024, 1, 1));
        assert_eq!(day_pillar(&d(2024, 3, 1)).name(), start.name());
        assert_ne!(day_pillar(&d(2024, 2, 29)).name(), start.name());
        assert_eq!(day_pillar(&d(1899, 11, 1)).name(), day_pillar(&d(1899, 12, 31)).name());
    }

    #[test]
    fn day_before_epoch() {
        assert_eq!(day_pillar(&d(1899, 12, 31)).name(), "癸酉");
    }

    #[test]
    fn year_boundary_modes() {
        let jan = d(2024, 1, 20);
        assert_eq!(year_pillar(&jan, &PillarConfig::default()).name(), "甲辰");
        let lichun = PillarConfig {
            year_boundary: YearBoundary::LiChun,
        };
        assert_eq!(year_pillar(&jan, &lichun).name(), "癸卯");
        assert_eq!(year_pillar(&d(2024, 2, 4), &lichun).name(), "甲辰");
    }

    #[test]
    fn month_branch_switches_on_boundary_day() {
        assert_eq!(month_pillar(&d(2024, 2, 3)).branch, Branch::Chou);
        assert_eq!(month_pillar(&d(2024, 2, 4)).branch, Branch::Yin);
        assert_eq!(month_pillar(&d(2024, 1, 5)).branch, Branch::Zi);
        assert_eq!(month_pillar(&d(2024, 12, 7)).branch, Branch::Zi);
        assert_eq!(month_pillar(&d(2024, 12, 6)).branch, Branch::Hai);
    }

    #[test]
    fn five_tigers() {
        // 甲辰 year: 寅 month is 丙寅.
        assert_eq!(month_pillar(&d(2024, 2, 10)).name(), "丙寅");
        // January 2024 belongs to 癸卯: 丑 month is 乙丑.
        assert_eq!(month_pillar(&d(2024, 1, 20)).name(), "乙丑");
        // December 2024 子 month of 甲辰 is 丙子.
        assert_eq!(month_pillar(&d(2024, 12, 20)).name(), "丙子");
    }

    #[test]
    fn five_rats() {
        // 甲 day starts at 甲子.
        assert_eq!(hour_pillar(Stem::Jia, 0).name(), "甲子");
        assert_eq!(hour_pillar(Stem::Jia, 23).name(), "甲子");
        // 乙 day: 丙子, so 午 hour is 壬午.
        assert_eq!(hour_pillar(Stem::Yi, 12).name(), "壬午");
        // 戊 day: 壬子.
        assert_eq!(hour_pillar(Stem::Wu, 0).name(), "壬子");
    }

    #[test]
    fn unknown_hour() {
        let p = four_pillars(&d(1990, 5, 15), None, &PillarConfig::default());
        assert!(p.hour.is_none());
        assert_eq!(p.iter().count(), 3);
        assert_eq!(p.branches().len(), 3);
    }

    #[test]
    fn parse_round_trips_display() {
        let p: FourPillars = "甲子 丙午 庚寅 戊戌".parse().unwrap();
        assert_eq!(p.day_master(), Stem::Geng);
        assert_eq!(p.to_string().parse::<FourPillars>().unwrap(), p);
        let q: FourPillars = "甲子 丙午 庚寅 ??".parse().unwrap();
        assert!(!q.hour_known());
        assert_eq!(q.to_string(), "甲子 丙午 庚寅 ??");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "甲子 丙午".parse::<FourPillars>().unwrap_err(),
            ChartError::PillarCount(2)
        );
        assert!(matches!(
            "甲子 丙午 庚丑".parse::<FourPillars>(),
            Err(ChartError::Parse(_))
        ));
    }

    #[test]
    fn hour_23_keeps_day() {
        let late = four_pillars_at(&CivilDateTime::new(2024, 3, 1, 23, 30), &PillarConfig::default());
        let early = four_pillars_at(&CivilDateTime::new(2024, 3, 1, 0, 30), &PillarConfig::default());
        assert_eq!(late.day, early.day);
        assert_eq!(late.hour, early.hour);
    }
}
