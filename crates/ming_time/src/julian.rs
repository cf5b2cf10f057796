//! Proleptic Gregorian day numbers.
//!
//! The Day Pillar needs an exact count of days between two civil dates over
//! centuries, so everything here is integer arithmetic on the Julian Day
//! Number (JDN) of a date at civil noon. No fractional days are involved.
//!
//! Algorithm: Fliegel & Van Flandern (1968), valid for all years > -4800.

/// JDN of 1900-01-01, the day-pillar reference date.
pub const JDN_1900_01_01: i64 = 2_415_021;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number of a proleptic Gregorian calendar date.
///
/// Does not validate the date: day 32 of a month rolls into the next month,
/// which is what the arithmetic naturally does.
pub fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let a = (14 - month).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Inverse of [`calendar_to_jdn`]: returns `(year, month, day)`.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u32, day as u32)
}

/// Signed number of days from `from` to `to`, each given as `(year, month, day)`.
pub fn days_between(from: (i32, u32, u32), to: (i32, u32, u32)) -> i64 {
    calendar_to_jdn(to.0, to.1, to.2) - calendar_to_jdn(from.0, from.1, from.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_number() {
        assert_eq!(calendar_to_jdn(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn reference_1900() {
        assert_eq!(calendar_to_jdn(1900, 1, 1), JDN_1900_01_01);
    }

    #[test]
    fn gregorian_reform_gap_is_not_modelled() {
        // Proleptic: 1582-10-04 and 1582-10-15 are 11 days apart, not 1.
        assert_eq!(days_between((1582, 10, 4), (1582, 10, 15)), 11);
    }

    #[test]
    fn inverse_recovers_dates() {
        for &(y, m, d) in &[(1900, 1, 1), (1984, 2, 29), (2000, 12, 31), (2024, 3, 1)] {
            assert_eq!(jdn_to_calendar(calendar_to_jdn(y, m, d)), (y, m, d));
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between((2024, 1, 1), (2023, 12, 31)), -1);
        assert_eq!(days_between((1900, 1, 1), (1900, 3, 1)), 59);
    }
}
