//! Civil calendar date and date/time in the fixed UTC+8 convention.
//!
//! `CivilDateTime` is the moment every chart is computed for. The fields are
//! taken at face value: the engine never shifts them between timezones.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jdn, days_in_month};

/// Offset of the civil convention from UTC, in hours (Singapore time).
pub const SGT_OFFSET_HOURS: i32 = 8;

/// Gregorian calendar date without a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Validated constructor.
    pub fn try_new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Whether this date falls strictly before `(month, day)` in its own year.
    pub fn is_before(&self, month: u32, day: u32) -> bool {
        (self.month, self.day) < (month, day)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date(s.trim())?;
        Self::try_new(year, month, day)
    }
}

/// Civil date and time of day (minute precision, UTC+8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    /// Unchecked constructor. Out-of-range fields are the caller's problem.
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Validated constructor: real Gregorian date, hour 0..=23, minute 0..=59.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        CivilDate::try_new(year, month, day)?;
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self::new(year, month, day, hour, minute))
    }

    pub const fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }

    /// Julian Day Number of the civil date (time of day ignored).
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}+{:02}:00",
            self.year, self.month, self.day, self.hour, self.minute, SGT_OFFSET_HOURS
        )
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DDThh:mm`, `YYYY-MM-DD hh:mm` or either with `:ss`
    /// (seconds are discarded).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected date and time in '{s}'")))?;
        let (year, month, day) = parse_date(date_part)?;

        let mut fields = time_part.trim().split(':');
        let hour: u32 = next_field(&mut fields, "hour")?.parse()?;
        let minute: u32 = next_field(&mut fields, "minute")?.parse()?;
        if let Some(sec) = fields.next() {
            let _: u32 = sec.parse()?;
        }
        if fields.next().is_some() {
            return Err(TimeError::Parse(format!("trailing fields in '{time_part}'")));
        }
        Self::try_new(year, month, day, hour, minute)
    }
}

fn next_field<'a>(
    it: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<&'a str, TimeError> {
    it.next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| TimeError::Parse(format!("missing {what}")))
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let mut fields = s.split('-');
    let year: i32 = next_field(&mut fields, "year")?.parse()?;
    let month: u32 = next_field(&mut fields, "month")?.parse()?;
    let day: u32 = next_field(&mut fields, "day")?.parse()?;
    if fields.next().is_some() {
        return Err(TimeError::Parse(format!("trailing fields in '{s}'")));
    }
    Ok((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unchecked() {
        let t = CivilDateTime::new(2023, 2, 30, 25, 0);
        assert_eq!(t.day, 30);
        assert_eq!(t.hour, 25);
    }

    #[test]
    fn try_new_rejects_bad_day() {
        assert_eq!(
            CivilDateTime::try_new(2023, 2, 29, 0, 0),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(CivilDateTime::try_new(2024, 2, 29, 0, 0).is_ok());
    }

    #[test]
    fn try_new_rejects_bad_time() {
        assert!(matches!(
            CivilDateTime::try_new(2024, 1, 1, 24, 0),
            Err(TimeError::InvalidTime { .. })
        ));
        assert!(matches!(
            CivilDateTime::try_new(2024, 1, 1, 12, 60),
            Err(TimeError::InvalidTime { .. })
        ));
    }

    #[test]
    fn display_carries_offset() {
        let t = CivilDateTime::new(2024, 3, 5, 9, 7);
        assert_eq!(t.to_string(), "2024-03-05T09:07+08:00");
        assert_eq!(t.date().to_string(), "2024-03-05");
    }

    #[test]
    fn parse_t_separator() {
        let t: CivilDateTime = "2024-03-05T09:07".parse().unwrap();
        assert_eq!(t, CivilDateTime::new(2024, 3, 5, 9, 7));
    }

    #[test]
    fn parse_space_and_seconds() {
        let t: CivilDateTime = "1990-12-31 23:59:30".parse().unwrap();
        assert_eq!(t, CivilDateTime::new(1990, 12, 31, 23, 59));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2024-03-05".parse::<CivilDateTime>().is_err());
        assert!("2024-03-05Tnoon".parse::<CivilDateTime>().is_err());
        assert!("2024-13-05T10:00".parse::<CivilDateTime>().is_err());
        assert!("2024-03-05T10:00:00:00".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn parse_date_only() {
        let d: CivilDate = "2000-01-01".parse().unwrap();
        assert_eq!(d.jdn(), 2_451_545);
    }

    #[test]
    fn is_before_compares_month_day() {
        let d = CivilDate::new(2024, 2, 3);
        assert!(d.is_before(2, 4));
        assert!(!d.is_before(2, 3));
        assert!(!CivilDate::new(2024, 3, 1).is_before(2, 4));
    }
}
