//! Civil date/time handling for the sexagenary calendar engine.
//!
//! This crate provides:
//! - `CivilDate` / `CivilDateTime` value types (fixed UTC+8 civil convention)
//! - Proleptic Gregorian day numbers (Julian Day Number) and day differences
//! - Calendar validation and `YYYY-MM-DDThh:mm` parsing
//!
//! The engine itself is timezone-agnostic: callers supply the integer fields
//! of a UTC+8 civil moment and every downstream computation works on those.

pub mod civil_time;
pub mod error;
pub mod julian;

pub use civil_time::{CivilDate, CivilDateTime, SGT_OFFSET_HOURS};
pub use error::TimeError;
pub use julian::{
    JDN_1900_01_01, calendar_to_jdn, days_between, days_in_month, is_leap_year, jdn_to_calendar,
};
