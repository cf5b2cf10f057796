//! BaZi analysis: Day Master strength, Useful Gods, special structures and
//! the dominant Ten God of a Four Pillars chart.

use tracing::debug;

use ming_base::{ALL_TEN_GODS, Branch, Element, Season, Stem, TenGodCategory, ten_god_of};

use crate::bazi_types::{
    Activation, BaziProfile, BranchLocation, BranchPairing, ChartTenGod, DominantTenGod,
    ElementCounts, HarmonyFrame, SeasonalStrength, SpecialStructures, StrengthAssessment,
    StrengthCategory, UsefulGods,
};
use crate::pillars::{FourPillars, PillarPosition};

const VISIBLE_WEIGHT: f64 = 1.0;
const HIDDEN_WEIGHT: f64 = 0.5;
const BALANCE_FACTOR: f64 = 0.5;

/// Six Combinations (六合) as branch index pairs.
pub const SIX_COMBINATIONS: [(u8, u8); 6] = [(0, 1), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)];

/// Six Clashes (六冲): branches six apart.
pub const SIX_CLASHES: [(u8, u8); 6] = [(0, 6), (1, 7), (2, 8), (3, 9), (4, 10), (5, 11)];

/// Three-Harmony frames (三合局) and the element each forms.
pub const THREE_HARMONIES: [(Element, [u8; 3]); 4] = [
    (Element::Water, [8, 0, 4]),
    (Element::Wood, [11, 3, 7]),
    (Element::Fire, [2, 6, 10]),
    (Element::Metal, [5, 9, 1]),
];

/// Seasonal standing of an element: Wood thrives in spring, dies in autumn.
pub const fn seasonal_strength(element: Element, season: Season) -> SeasonalStrength {
    use SeasonalStrength::{Dead, Prosperous, Strong, Weak};
    match (element, season) {
        (Element::Wood, Season::Spring) => Prosperous,
        (Element::Wood, Season::Summer) => Weak,
        (Element::Wood, Season::Autumn) => Dead,
        (Element::Wood, Season::Winter) => Strong,
        (Element::Fire, Season::Spring) => Strong,
        (Element::Fire, Season::Summer) => Prosperous,
        (Element::Fire, Season::Autumn) => Weak,
        (Element::Fire, Season::Winter) => Dead,
        (Element::Earth, Season::Spring) => Dead,
        (Element::Earth, Season::Summer) => Strong,
        (Element::Earth, Season::Autumn) => Prosperous,
        (Element::Earth, Season::Winter) => Weak,
        (Element::Metal, Season::Spring) => Dead,
        (Element::Metal, Season::Summer) => Weak,
        (Element::Metal, Season::Autumn) => Prosperous,
        (Element::Metal, Season::Winter) => Strong,
        (Element::Water, Season::Spring) => Weak,
        (Element::Water, Season::Summer) => Dead,
        (Element::Water, Season::Autumn) => Strong,
        (Element::Water, Season::Winter) => Prosperous,
    }
}

/// Earth branch that stores wealth for a Day Master element.
pub const fn wealth_vault_branch(dm: Element) -> Branch {
    match dm {
        Element::Wood => Branch::Wei,
        Element::Fire => Branch::Xu,
        Element::Earth | Element::Water => Branch::Chen,
        Element::Metal => Branch::Chou,
    }
}

/// Nobleman (天乙贵人) branches for a Day Master stem.
pub const fn nobleman_branches(dm: Stem) -> [Branch; 2] {
    match dm {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Xin => [Branch::Yin, Branch::Wu],
        Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
    }
}

/// Ten God of every stem in the chart except the Day Master itself.
///
/// Visible stems come first in pillar order, then hidden stems of every
/// known branch (the day branch included).
pub fn chart_ten_gods(pillars: &FourPillars) -> Vec<ChartTenGod> {
    let dm = pillars.day_master();
    let mut out = Vec::with_capacity(16);
    for (position, p) in pillars.iter() {
        if position != PillarPosition::Day {
            out.push(ChartTenGod {
                position,
                stem: p.stem,
                ten_god: ten_god_of(dm, p.stem),
                hidden: false,
            });
        }
    }
    for (position, p) in pillars.iter() {
        for &stem in p.branch.hidden_stems() {
            out.push(ChartTenGod {
                position,
                stem,
                ten_god: ten_god_of(dm, stem),
                hidden: true,
            });
        }
    }
    out
}

/// Day Master strength from season plus weighted support and drain.
///
/// `score = clamp(base + (support - drain) * 0.5, 1, 10)`.
pub fn assess_strength(pillars: &FourPillars, ten_gods: &[ChartTenGod]) -> StrengthAssessment {
    let dm_element = pillars.day_master().element();
    let season = pillars.month.branch.season();
    let seasonal = seasonal_strength(dm_element, season);

    let (mut support, mut drain) = (0.0, 0.0);
    for tg in ten_gods {
        let w = if tg.hidden { HIDDEN_WEIGHT } else { VISIBLE_WEIGHT };
        match tg.category() {
            TenGodCategory::Companion | TenGodCategory::Resource => support += w,
            _ => drain += w,
        }
    }

    let raw = (seasonal.base_score() + (support - drain) * BALANCE_FACTOR).clamp(1.0, 10.0);
    StrengthAssessment {
        season,
        seasonal,
        support,
        drain,
        score: round1(raw),
        category: StrengthCategory::from_score(raw),
        hour_known: pillars.hour_known(),
    }
}

/// Useful Gods for a Day Master element and strength category.
pub fn useful_gods(dm: Element, category: StrengthCategory) -> UsefulGods {
    let resource = TenGodCategory::Resource.element_for(dm);
    let output = TenGodCategory::Output.element_for(dm);
    let wealth = TenGodCategory::Wealth.element_for(dm);
    let authority = TenGodCategory::Authority.element_for(dm);

    if category.is_weak() {
        UsefulGods {
            primary: resource,
            secondary: dm,
            tertiary: None,
            unfavorable: vec![output, wealth],
            reasoning: format!(
                "Weak {dm} Day Master needs strengthening. {resource} (Resource) produces and \
                 supports {dm}. More {dm} (Companion) provides peer support. Avoid \
                 {output}/{wealth} which drain energy."
            ),
        }
    } else if category.is_strong() {
        UsefulGods {
            primary: output,
            secondary: wealth,
            tertiary: Some(authority),
            unfavorable: vec![resource, dm],
            reasoning: format!(
                "Strong {dm} Day Master needs draining/balancing. {output} (Output) channels \
                 excess energy productively. {wealth} (Wealth) gives purpose. {authority} \
                 (Authority) provides discipline. Avoid more {resource}/{dm} which \
                 over-strengthen."
            ),
        }
    } else {
        UsefulGods {
            primary: output,
            secondary: wealth,
            tertiary: Some(resource),
            unfavorable: Vec::new(),
            reasoning: format!(
                "Balanced {dm} Day Master can benefit from most elements. {output} for \
                 creativity, {wealth} for prosperity, {resource} for support when needed."
            ),
        }
    }
}

/// Wealth Vault, Nobleman, Six Combinations/Clashes and Three Harmonies.
pub fn detect_structures(pillars: &FourPillars) -> SpecialStructures {
    let dm = pillars.day_master();
    let located: Vec<BranchLocation> = pillars
        .iter()
        .map(|(position, p)| BranchLocation {
            position,
            branch: p.branch,
        })
        .collect();
    let has = |idx: u8| located.iter().any(|l| l.branch.index() == idx);

    let vault = wealth_vault_branch(dm.element());
    let noble = nobleman_branches(dm);

    let pairs = |table: &[(u8, u8)], suffix: char| -> Vec<BranchPairing> {
        table
            .iter()
            .filter(|&&(a, b)| has(a) && has(b))
            .map(|&(a, b)| {
                let (ba, bb) = (Branch::from_index(a as i64), Branch::from_index(b as i64));
                BranchPairing {
                    branches: [ba, bb],
                    label: format!("{}{}{}", ba.glyph(), bb.glyph(), suffix),
                }
            })
            .collect()
    };

    let three_harmonies = THREE_HARMONIES
        .iter()
        .filter_map(|&(element, frame)| {
            let present = frame.iter().filter(|&&i| has(i)).count() as u8;
            (present >= 2).then(|| HarmonyFrame {
                element,
                branches: frame.map(|i| Branch::from_index(i as i64)),
                present,
                complete: present == 3,
            })
        })
        .collect();

    SpecialStructures {
        wealth_vault_branch: vault,
        wealth_vault: located.iter().copied().find(|l| l.branch == vault),
        nobleman_branches: noble,
        nobleman: located
            .iter()
            .copied()
            .filter(|l| noble.contains(&l.branch))
            .collect(),
        six_combinations: pairs(&SIX_COMBINATIONS[..], '合'),
        six_clashes: pairs(&SIX_CLASHES[..], '冲'),
        three_harmonies,
    }
}

/// Most frequent Ten God: visible stems weigh 2, hidden stems 1. Ties go to
/// the earlier entry of the canonical Ten-God order.
pub fn dominant_ten_god(ten_gods: &[ChartTenGod]) -> DominantTenGod {
    let mut weights = [0u32; 10];
    for tg in ten_gods {
        weights[tg.ten_god.index() as usize] += if tg.hidden { 1 } else { 2 };
    }
    let mut best = ALL_TEN_GODS[0];
    for g in ALL_TEN_GODS {
        if weights[g.index() as usize] > weights[best.index() as usize] {
            best = g;
        }
    }
    DominantTenGod {
        ten_god: best,
        weight: weights[best.index() as usize],
        profile: best.profile(),
    }
}

/// Element tally over every known stem and branch (Day Master included).
pub fn element_counts(pillars: &FourPillars) -> ElementCounts {
    let mut counts = ElementCounts::default();
    for (_, p) in pillars.iter() {
        counts.add(p.stem.element());
        counts.add(p.branch.element());
    }
    counts
}

/// Presence of the Useful Gods among the chart's elements.
///
/// `score = clamp((0.5 p + 0.3 s - 0.2 u) / 10, 0, 10)` with p, s, u the
/// primary, secondary and unfavorable percentages.
pub fn activation(useful: &UsefulGods, counts: &ElementCounts) -> Activation {
    let total = counts.total().max(1) as f64;
    let pct = |n: u32| round1(n as f64 / total * 100.0);

    let primary_count = counts.get(useful.primary);
    let secondary_count = counts.get(useful.secondary);
    let unfavorable_count: u32 = useful.unfavorable.iter().map(|&e| counts.get(e)).sum();

    let (p, s, u) = (pct(primary_count), pct(secondary_count), pct(unfavorable_count));
    let score = ((0.5 * p + 0.3 * s - 0.2 * u) / 10.0).clamp(0.0, 10.0);

    Activation {
        primary_count,
        primary_percentage: p,
        secondary_count,
        secondary_percentage: s,
        unfavorable_count,
        unfavorable_percentage: u,
        score: round1(score),
    }
}

/// Full analysis of a chart.
pub fn analyze(pillars: &FourPillars) -> BaziProfile {
    let ten_gods = chart_ten_gods(pillars);
    let strength = assess_strength(pillars, &ten_gods);
    let dm = pillars.day_master();
    let useful = useful_gods(dm.element(), strength.category);
    let structures = detect_structures(pillars);
    let dominant = dominant_ten_god(&ten_gods);
    let counts = element_counts(pillars);
    let activation = activation(&useful, &counts);

    debug!(
        day_master = %dm,
        score = strength.score,
        category = strength.category.name(),
        dominant = dominant.ten_god.name(),
        "bazi analysed"
    );

    BaziProfile {
        pillars: *pillars,
        day_master: dm,
        ten_gods,
        strength,
        useful_gods: useful,
        structures,
        dominant,
        element_counts: counts,
        activation,
    }
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
