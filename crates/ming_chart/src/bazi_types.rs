//! Types for BaZi analysis results.

use serde::Serialize;

use ming_base::{ALL_ELEMENTS, Branch, Element, Season, Stem, TenGod, TenGodCategory, TenGodProfile};

use crate::pillars::{FourPillars, PillarPosition};

/// Seasonal standing of the Day Master's element in the month branch's season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeasonalStrength {
    Prosperous,
    Strong,
    Weak,
    Dead,
}

impl SeasonalStrength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prosperous => "Prosperous",
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Dead => "Dead",
        }
    }

    /// Starting score before support/drain adjustment.
    pub const fn base_score(self) -> f64 {
        match self {
            Self::Prosperous => 8.0,
            Self::Strong => 6.0,
            Self::Weak => 4.0,
            Self::Dead => 2.0,
        }
    }
}

/// Day Master strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthCategory {
    ExtremelyWeak,
    Weak,
    Balanced,
    Strong,
    ExtremelyStrong,
}

impl StrengthCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExtremelyWeak => "Extremely Weak",
            Self::Weak => "Weak",
            Self::Balanced => "Balanced",
            Self::Strong => "Strong",
            Self::ExtremelyStrong => "Extremely Strong",
        }
    }

    /// Thresholds: >=9, >=7, >=4, >2, else.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::ExtremelyStrong
        } else if score >= 7.0 {
            Self::Strong
        } else if score >= 4.0 {
            Self::Balanced
        } else if score > 2.0 {
            Self::Weak
        } else {
            Self::ExtremelyWeak
        }
    }

    pub const fn is_weak(self) -> bool {
        matches!(self, Self::Weak | Self::ExtremelyWeak)
    }

    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Strong | Self::ExtremelyStrong)
    }
}

impl std::fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Day Master strength assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthAssessment {
    /// Season of the month branch.
    pub season: Season,
    pub seasonal: SeasonalStrength,
    /// Weighted count of Companion and Resource stems.
    pub support: f64,
    /// Weighted count of Output, Wealth and Authority stems.
    pub drain: f64,
    /// Final score in [1, 10], one decimal.
    pub score: f64,
    pub category: StrengthCategory,
    /// False when the hour pillar was unknown and left out of the count.
    pub hour_known: bool,
}

/// Favorable and unfavorable elements for the Day Master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsefulGods {
    pub primary: Element,
    pub secondary: Element,
    pub tertiary: Option<Element>,
    pub unfavorable: Vec<Element>,
    pub reasoning: String,
}

impl UsefulGods {
    pub fn is_unfavorable(&self, e: Element) -> bool {
        self.unfavorable.contains(&e)
    }
}

/// One stem of the chart and its Ten God.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartTenGod {
    pub position: PillarPosition,
    pub stem: Stem,
    pub ten_god: TenGod,
    /// True for a stem hidden inside the pillar's branch.
    pub hidden: bool,
}

impl ChartTenGod {
    pub const fn category(&self) -> TenGodCategory {
        self.ten_god.category()
    }
}

/// A branch found at a pillar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchLocation {
    pub position: PillarPosition,
    pub branch: Branch,
}

/// A branch pair (combination or clash) present in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchPairing {
    pub branches: [Branch; 2],
    /// e.g. `"子丑合"` or `"子午冲"`.
    pub label: String,
}

/// A Three-Harmony frame with at least two of its three branches present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HarmonyFrame {
    /// Element the frame forms.
    pub element: Element,
    pub branches: [Branch; 3],
    pub present: u8,
    pub complete: bool,
}

/// Branch-derived special structures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialStructures {
    /// Vault branch for the Day Master's element.
    pub wealth_vault_branch: Branch,
    /// First pillar holding the vault branch, if any.
    pub wealth_vault: Option<BranchLocation>,
    /// Nobleman branches for the Day Master stem.
    pub nobleman_branches: [Branch; 2],
    /// Every pillar holding a nobleman branch.
    pub nobleman: Vec<BranchLocation>,
    pub six_combinations: Vec<BranchPairing>,
    pub six_clashes: Vec<BranchPairing>,
    pub three_harmonies: Vec<HarmonyFrame>,
}

impl SpecialStructures {
    pub fn has_wealth_vault(&self) -> bool {
        self.wealth_vault.is_some()
    }

    pub fn has_nobleman(&self) -> bool {
        !self.nobleman.is_empty()
    }

    pub fn has_six_clash(&self) -> bool {
        !self.six_clashes.is_empty()
    }
}

/// Per-element tally over stems and branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementCounts {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl ElementCounts {
    pub const fn get(&self, e: Element) -> u32 {
        match e {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn add(&mut self, e: Element) {
        match e {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
    }

    pub fn total(&self) -> u32 {
        ALL_ELEMENTS.iter().map(|&e| self.get(e)).sum()
    }
}

/// How strongly the Useful Gods show up in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Activation {
    pub primary_count: u32,
    pub primary_percentage: f64,
    pub secondary_count: u32,
    pub secondary_percentage: f64,
    pub unfavorable_count: u32,
    pub unfavorable_percentage: f64,
    /// 0..=10, one decimal.
    pub score: f64,
}

/// Most frequent Ten God and its archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DominantTenGod {
    pub ten_god: TenGod,
    /// Visible stems weigh 2, hidden stems 1.
    pub weight: u32,
    pub profile: &'static TenGodProfile,
}

/// Complete BaZi analysis of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziProfile {
    pub pillars: FourPillars,
    pub day_master: Stem,
    pub ten_gods: Vec<ChartTenGod>,
    pub strength: StrengthAssessment,
    pub useful_gods: UsefulGods,
    pub structures: SpecialStructures,
    pub dominant: DominantTenGod,
    pub element_counts: ElementCounts,
    pub activation: Activation,
}
