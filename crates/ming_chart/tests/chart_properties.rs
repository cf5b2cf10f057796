//! Integration tests across pillars, charts, scoring and ranking.
//!
//! Pure computation, no fixtures. Moments are arbitrary civil date-times.

use ming_base::{ALL_PALACES, Element, Palace, Stem, TenGod, component_strength};
use ming_chart::{
    AlignmentWeights, PillarConfig, QmdjConfig, StrengthCategory, Verdict, align, analyze,
    detect_structures, four_pillars_at, generate, normalize_score, read_palace, summarize_all,
    useful_gods,
};
use ming_time::CivilDateTime;

fn moments() -> Vec<CivilDateTime> {
    let mut v = Vec::new();
    for year in [1901, 1950, 1984, 2000, 2024, 2077] {
        for month in [1, 2, 6, 7, 12] {
            for hour in [0, 5, 11, 12, 23] {
                v.push(CivilDateTime::new(year, month, 14, hour, 30));
            }
        }
    }
    v
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn charts_and_profiles_are_deterministic() {
    let cfg = QmdjConfig::default();
    for m in moments() {
        assert_eq!(generate(&m, &cfg), generate(&m, &cfg));
        let p = four_pillars_at(&m, &PillarConfig::default());
        assert_eq!(analyze(&p), analyze(&p));
        assert_eq!(summarize_all(&m, &cfg), summarize_all(&m, &cfg));
    }
}

// ---------------------------------------------------------------------------
// Scoring bounds
// ---------------------------------------------------------------------------

#[test]
fn every_palace_scores_in_range() {
    let cfg = QmdjConfig::default();
    for m in moments() {
        let chart = generate(&m, &cfg);
        for palace in ALL_PALACES {
            let r = read_palace(&chart, palace);
            assert!((-12..=12).contains(&r.component_total));
            assert!((1.0..=10.0).contains(&r.normalized));
            assert_eq!(r.verdict, Verdict::from_score(r.normalized));
        }
    }
}

#[test]
fn zero_total_normalizes_to_neutral() {
    let n = normalize_score(0);
    assert!((n - 5.5).abs() < 1e-12);
    assert_eq!(Verdict::from_score(n), Verdict::Neutral);
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn ranking_covers_all_palaces_descending() {
    for m in moments() {
        let ranked = summarize_all(&m, &QmdjConfig::default());
        assert_eq!(ranked.len(), 9);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        let mut seen = [false; 9];
        for s in &ranked {
            seen[(s.palace.number() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }
}

// ---------------------------------------------------------------------------
// Worked scenarios
// ---------------------------------------------------------------------------

#[test]
fn geng_against_bing_is_seven_killings() {
    assert_eq!(ming_base::ten_god_of(Stem::Geng, Stem::Bing), TenGod::SevenKillings);
}

#[test]
fn weak_jia_wants_water() {
    let u = useful_gods(Element::Wood, StrengthCategory::Weak);
    assert_eq!(u.primary, Element::Water);
    assert_eq!(u.secondary, Element::Wood);
    assert_eq!(u.unfavorable, vec![Element::Fire, Element::Earth]);
}

#[test]
fn fire_in_wood_palace() {
    let s = component_strength(Element::Fire, Element::Wood);
    assert_eq!(s.name(), "Prosperous");
    assert_eq!(s.score(), 3);
}

#[test]
fn zi_wu_clash_in_birth_chart() {
    let pillars = ming_chart::FourPillars {
        year: "庚子".parse().unwrap(),
        month: "壬午".parse().unwrap(),
        day: "甲辰".parse().unwrap(),
        hour: None,
    };
    let st = detect_structures(&pillars);
    assert!(st.has_six_clash());
    assert_eq!(st.six_clashes[0].label, "子午冲");
}

#[test]
fn unknown_hour_profile_still_complete() {
    let pillars = ming_chart::four_pillars(
        &ming_time::CivilDate::new(1990, 6, 15),
        None,
        &PillarConfig::default(),
    );
    let profile = analyze(&pillars);
    assert!(!profile.strength.hour_known);
    assert!(profile.ten_gods.iter().all(|t| t.position != ming_chart::PillarPosition::Hour));
}

#[test]
fn alignment_bounded_for_every_palace() {
    let birth = CivilDateTime::new(1988, 3, 9, 7, 15);
    let profile = analyze(&four_pillars_at(&birth, &PillarConfig::default()));
    let chart = generate(&CivilDateTime::new(2024, 10, 1, 15, 0), &QmdjConfig::default());
    for palace in ALL_PALACES {
        let a = align(&profile, &chart, palace, &AlignmentWeights::default());
        assert!((0.0..=10.0).contains(&a.score));
        assert_eq!(a.base, 5.0);
    }
    let center = read_palace(&chart, Palace::Center);
    assert!(center.deity.is_none());
}
