//! Composed computations over the sexagenary tables: Four Pillars, BaZi
//! analysis, nine-palace (QMDJ) charts, palace scoring and ranking.
//!
//! This crate provides:
//! - Civil date/time to Year/Month/Day/Hour pillars
//! - Day Master strength, Useful Gods, special structures, dominant Ten God
//! - Deterministic nine-palace chart generation behind a layout trait
//! - Per-palace component strength, 1..10 score, verdict and guidance
//! - BaZi-to-chart alignment score with itemized breakdown
//! - Ranking of all nine palaces for a moment
//!
//! All functions are pure; every chart or profile is a fresh value.

pub mod alignment;
pub mod bazi;
pub mod bazi_types;
pub mod error;
pub mod pillars;
pub mod qmdj;
pub mod qmdj_types;
pub mod scoring;
pub mod summary;

pub use alignment::{
    Alignment, AlignmentItem, AlignmentVerdict, AlignmentWeights, align, alignment_score,
};
pub use bazi::{
    SIX_CLASHES, SIX_COMBINATIONS, THREE_HARMONIES, activation, analyze, assess_strength,
    chart_ten_gods, detect_structures, dominant_ten_god, element_counts, nobleman_branches,
    seasonal_strength, useful_gods, wealth_vault_branch,
};
pub use bazi_types::{
    Activation, BaziProfile, BranchLocation, BranchPairing, ChartTenGod, DominantTenGod,
    ElementCounts, HarmonyFrame, SeasonalStrength, SpecialStructures, StrengthAssessment,
    StrengthCategory, UsefulGods,
};
pub use error::ChartError;
pub use pillars::{
    DAY_EPOCH_INDEX, FourPillars, PillarConfig, PillarPosition, YearBoundary, day_pillar,
    four_pillars, four_pillars_at, hour_pillar, month_pillar, year_pillar,
};
pub use qmdj::{
    PlateLayout, RotationLayout, chart_metadata, dun_and_ju, generate, generate_from_str,
    generate_with,
};
pub use qmdj_types::{ChartMetadata, ChartMethod, Dun, Formation, PalaceSlot, QmdjChart, QmdjConfig};
pub use scoring::{
    ALL_COMPONENT_KINDS, CENTER_DOOR_ELEMENT, ComponentKind, ComponentReading, DeityReading,
    MAX_COMPONENT_TOTAL, PalaceInfo, PalaceReading, Tone, Verdict, advice_text, component_elements,
    component_total, normalize_score, palace_score, read_palace, read_palace_number, summary_text,
};
pub use summary::{PalaceSummary, summarize_all, summarize_chart};
