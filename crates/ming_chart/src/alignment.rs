//! Cross-scoring a BaZi profile against the elements of a chart palace.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ming_base::{Element, Palace};

use crate::bazi::round1;
use crate::bazi_types::{BaziProfile, SpecialStructures, UsefulGods};
use crate::qmdj_types::QmdjChart;
use crate::scoring::{ComponentKind, component_elements};

/// Weights of the alignment score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentWeights {
    pub base: f64,
    /// Added per component matching the primary Useful God.
    pub primary: f64,
    pub secondary: f64,
    /// Added (negative) per component in the unfavorable set.
    pub unfavorable: f64,
    pub wealth_vault: f64,
    pub nobleman: f64,
    /// Added (negative) when any Six Clash is present.
    pub six_clash: f64,
}

impl Default for AlignmentWeights {
    fn default() -> Self {
        Self {
            base: 5.0,
            primary: 1.5,
            secondary: 1.0,
            unfavorable: -1.0,
            wealth_vault: 0.5,
            nobleman: 0.5,
            six_clash: -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlignmentVerdict {
    Excellent,
    Good,
    Mixed,
    Poor,
    Conflicting,
}

impl AlignmentVerdict {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Mixed
        } else if score >= 2.0 {
            Self::Poor
        } else {
            Self::Conflicting
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Alignment",
            Self::Good => "Good Alignment",
            Self::Mixed => "Mixed Alignment",
            Self::Poor => "Poor Alignment",
            Self::Conflicting => "Conflicting Alignment",
        }
    }
}

impl std::fmt::Display for AlignmentVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentItem {
    pub delta: f64,
    pub reason: String,
}

impl std::fmt::Display for AlignmentItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.1}: {}", self.delta, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alignment {
    pub base: f64,
    /// Clamped to `0.0..=10.0`, one decimal.
    pub score: f64,
    pub verdict: AlignmentVerdict,
    pub breakdown: Vec<AlignmentItem>,
}

/// Score component elements against Useful Gods and structures.
///
/// Each component counts once, for the first of primary, secondary or
/// unfavorable that it matches.
pub fn alignment_score(
    useful: &UsefulGods,
    structures: &SpecialStructures,
    elements: &[(ComponentKind, Element)],
    weights: &AlignmentWeights,
) -> Alignment {
    let mut score = weights.base;
    let mut breakdown = Vec::new();
    let mut push = |delta: f64, reason: String| {
        score += delta;
        breakdown.push(AlignmentItem { delta, reason });
    };

    for &(kind, el) in elements {
        let matched = if el == useful.primary {
            Some((weights.primary, "Primary Useful God"))
        } else if el == useful.secondary {
            Some((weights.secondary, "Secondary Useful God"))
        } else if useful.is_unfavorable(el) {
            Some((weights.unfavorable, "Unfavorable Element"))
        } else {
            None
        };
        if let Some((delta, label)) = matched {
            push(delta, format!("{} ({}) = {}", kind.key(), el, label));
        }
    }

    if structures.has_wealth_vault() {
        push(weights.wealth_vault, "Wealth Vault present".to_string());
    }
    if structures.has_nobleman() {
        push(weights.nobleman, "Nobleman Star present".to_string());
    }
    if structures.has_six_clash() {
        push(weights.six_clash, "Six Clash present (conflict)".to_string());
    }

    let score = round1(score.clamp(0.0, 10.0));
    Alignment {
        base: weights.base,
        score,
        verdict: AlignmentVerdict::from_score(score),
        breakdown,
    }
}

/// Alignment of a profile with one palace of a chart.
pub fn align(
    profile: &BaziProfile,
    chart: &QmdjChart,
    palace: Palace,
    weights: &AlignmentWeights,
) -> Alignment {
    let elements = component_elements(chart.slot(palace));
    let a = alignment_score(&profile.useful_gods, &profile.structures, &elements, weights);
    debug!(palace = palace.number(), score = a.score, "bazi alignment");
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bazi::{analyze, detect_structures, useful_gods};
    use crate::bazi_types::StrengthCategory;
    use crate::pillars::FourPillars;

    fn geng_chart() -> FourPillars {
        FourPillars {
            year: "甲子".parse().unwrap(),
            month: "丙午".parse().unwrap(),
            day: "庚寅".parse().unwrap(),
            hour: Some("戊戌".parse().unwrap()),
        }
    }

    #[test]
    fn weak_metal_with_clash() {
        let useful = useful_gods(Element::Metal, StrengthCategory::Weak);
        let st = detect_structures(&geng_chart());
        let elements = [
            (ComponentKind::HeavenStem, Element::Earth),
            (ComponentKind::EarthStem, Element::Metal),
            (ComponentKind::Star, Element::Water),
            (ComponentKind::Door, Element::Fire),
        ];
        let a = alignment_score(&useful, &st, &elements, &AlignmentWeights::default());
        // 5 + 1.5 + 1.0 - 1.0 - 1.0
        assert_eq!(a.score, 5.5);
        assert_eq!(a.verdict, AlignmentVerdict::Mixed);
        let lines: Vec<String> = a.breakdown.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "+1.5: heaven_stem (Earth) = Primary Useful God",
                "+1.0: earth_stem (Metal) = Secondary Useful God",
                "-1.0: star (Water) = Unfavorable Element",
                "-1.0: Six Clash present (conflict)",
            ]
        );
    }

    #[test]
    fn clamped_to_ten() {
        let useful = useful_gods(Element::Metal, StrengthCategory::Weak);
        let mut st = detect_structures(&geng_chart());
        st.six_clashes.clear();
        let elements = [(ComponentKind::Star, Element::Earth); 4];
        let w = AlignmentWeights {
            primary: 3.0,
            ..AlignmentWeights::default()
        };
        let a = alignment_score(&useful, &st, &elements, &w);
        assert_eq!(a.score, 10.0);
        assert_eq!(a.verdict, AlignmentVerdict::Excellent);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(AlignmentVerdict::from_score(8.0).name(), "Excellent Alignment");
        assert_eq!(AlignmentVerdict::from_score(6.0).name(), "Good Alignment");
        assert_eq!(AlignmentVerdict::from_score(1.9).name(), "Conflicting Alignment");
    }

    #[test]
    fn align_with_generated_chart_is_bounded() {
        use crate::qmdj::generate;
        use crate::qmdj_types::QmdjConfig;
        use ming_base::ALL_PALACES;
        use ming_time::CivilDateTime;

        let profile = analyze(&geng_chart());
        let chart = generate(&CivilDateTime::new(2024, 8, 1, 9, 30), &QmdjConfig::default());
        for palace in ALL_PALACES {
            let a = align(&profile, &chart, palace, &AlignmentWeights::default());
            assert!((0.0..=10.0).contains(&a.score));
        }
    }

    #[test]
    fn align_scores_plate_components_only() {
        use crate::qmdj::generate;
        use crate::qmdj_types::QmdjConfig;
        use ming_base::ALL_PALACES;
        use ming_time::CivilDateTime;

        let profile = analyze(&geng_chart());
        let chart = generate(&CivilDateTime::new(2024, 8, 1, 9, 30), &QmdjConfig::default());
        let w = AlignmentWeights::default();
        for palace in ALL_PALACES {
            let a = align(&profile, &chart, palace, &w);
            let elements = component_elements(chart.slot(palace));
            assert_eq!(elements.len(), 4);
            let direct = alignment_score(&profile.useful_gods, &profile.structures, &elements, &w);
            assert_eq!(a.score, direct.score);
            assert!(a.breakdown.iter().all(|item| !item.reason.contains("deity")));
        }
    }
}
