//! Integration tests for the stem/branch tables and the 60-cycle.
//!
//! Pure table checks, no inputs beyond the crate's own constants.

use ming_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, ALL_TEN_GODS, Branch, Pillar, Polarity, Stem, TenGod,
    classify,
};

// ---------------------------------------------------------------------------
// Sexagenary cycle
// ---------------------------------------------------------------------------

#[test]
fn cycle_closure_for_any_integer() {
    for n in -200_i64..200 {
        let p = Pillar::from_cycle_index(n);
        assert!(p.stem.index() <= 9);
        assert!(p.branch.index() <= 11);
        assert_eq!(Pillar::from_cycle_index(n + 60), p, "n = {n}");
    }
}

#[test]
fn sixty_distinct_pairs_all_same_polarity() {
    let mut seen = std::collections::HashSet::new();
    for n in 0..60 {
        let p = Pillar::from_cycle_index(n);
        assert_eq!(p.stem.polarity(), p.branch.polarity());
        assert!(seen.insert(p));
    }
    assert_eq!(seen.len(), 60);
}

#[test]
fn every_valid_pair_parses_back() {
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            let ok = Pillar::try_new(s, b);
            assert_eq!(ok.is_ok(), s.polarity() == b.polarity(), "{s}{b}");
            if let Ok(p) = ok {
                assert_eq!(p.name().parse::<Pillar>(), Ok(p));
            }
        }
    }
}

#[test]
fn each_decade_voids_two_branches_not_in_it() {
    for lead in (0..60).step_by(10) {
        let leader = Pillar::from_cycle_index(lead);
        let void = leader.void_branches();
        let members: Vec<Branch> = (lead..lead + 10)
            .map(|n| Pillar::from_cycle_index(n).branch)
            .collect();
        for v in void {
            assert!(!members.contains(&v), "{} decade", leader.name());
        }
    }
}

// ---------------------------------------------------------------------------
// Ten Gods
// ---------------------------------------------------------------------------

#[test]
fn classify_is_total_and_each_god_reachable() {
    let mut hits = [0u32; 10];
    for de in ALL_ELEMENTS {
        for dp in [Polarity::Yang, Polarity::Yin] {
            for te in ALL_ELEMENTS {
                for tp in [Polarity::Yang, Polarity::Yin] {
                    hits[classify(de, dp, te, tp).index() as usize] += 1;
                }
            }
        }
    }
    // 100 inputs spread evenly over 10 outcomes.
    assert!(hits.iter().all(|&h| h == 10), "{hits:?}");
}

#[test]
fn each_day_master_sees_every_god_once() {
    for dm in ALL_STEMS {
        let gods: Vec<TenGod> = ming_base::ten_god_map(dm).iter().map(|&(_, g)| g).collect();
        for g in ALL_TEN_GODS {
            assert_eq!(gods.iter().filter(|&&x| x == g).count(), 1, "{dm} {g}");
        }
    }
}

#[test]
fn hidden_stems_are_real_stems() {
    for b in ALL_BRANCHES {
        for hs in b.hidden_stems() {
            assert_eq!(Stem::from_glyph(hs.glyph()), Some(*hs));
        }
    }
}
