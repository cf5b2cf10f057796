//! Constant tables and pure primitives of the sexagenary calendar and the
//! nine-palace chart.
//!
//! This crate provides:
//! - Five elements with production/control cycles, polarity, nature
//! - Ten Heavenly Stems and twelve Earthly Branches (hidden stems, seasons,
//!   two-hour windows)
//! - The 60-pair Ganzhi cycle with Xun leaders and void branches
//! - Ten-God classification and archetype profiles
//! - Palaces and topics, Nine Stars, Eight Doors, Eight Deities
//! - Approximate solar terms and month boundaries
//! - Component strength of an element inside a palace
//!
//! Everything here is a lookup or small integer arithmetic; nothing allocates
//! except the string-formatting helpers.

pub mod branch;
pub mod deity;
pub mod door;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod palace;
pub mod solar_term;
pub mod star;
pub mod stem;
pub mod strength;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch, Season};
pub use deity::{ALL_DEITIES, Deity};
pub use door::{ALL_DOORS, Door, NO_DOOR_ADVICE};
pub use element::{ALL_ELEMENTS, Element, Nature, Polarity};
pub use error::ParseError;
pub use ganzhi::{Pillar, YEAR_EPOCH};
pub use palace::{ALL_PALACES, ALL_TOPICS, OUTER_PALACES, Palace, Topic};
pub use solar_term::{LICHUN, MONTH_BOUNDARY_DAYS, SolarTerm, month_boundary_day};
pub use star::{ALL_STARS, Star};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{ALL_STRENGTHS, Strength, component_strength, component_strength_opt};
pub use ten_god::{
    ALL_TEN_GOD_CATEGORIES, ALL_TEN_GODS, TenGod, TenGodCategory, TenGodProfile, classify,
    ten_god_map, ten_god_of,
};
