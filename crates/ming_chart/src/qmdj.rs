//! Nine-palace chart generation.
//!
//! The plate arrangement sits behind [`PlateLayout`]. The one layout shipped
//! is [`RotationLayout`], a deterministic rotation scheme: a pseudo Ju number
//! is derived from the date, and fixed rings of stems, stars, doors and
//! deities are rotated into the palaces by Ju and hour. It always yields a
//! fully populated chart but does not follow real solar-term almanacs.

use tracing::debug;

use ming_base::{Deity, Door, OUTER_PALACES, SolarTerm, Star, Stem};
use ming_time::CivilDateTime;

use crate::error::ChartError;
use crate::pillars::four_pillars_at;
use crate::qmdj_types::{ChartMetadata, Dun, Formation, QmdjChart, QmdjConfig, empty_slots};

/// Arranges the plates of a chart for one moment.
pub trait PlateLayout {
    fn formation(&self, moment: &CivilDateTime) -> Formation;
}

/// Rotation-based plate arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationLayout;

/// Earth plate ring for Yang Dun: 戊己庚辛壬癸丁丙乙.
const EARTH_RING_YANG: [Stem; 9] = [
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Ding,
    Stem::Bing,
    Stem::Yi,
];

/// Earth plate ring for Yin Dun: 戊乙丙丁癸壬辛庚己.
const EARTH_RING_YIN: [Stem; 9] = [
    Stem::Wu,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Gui,
    Stem::Ren,
    Stem::Xin,
    Stem::Geng,
    Stem::Ji,
];

/// 蓬芮沖輔禽心柱任英.
const STAR_RING: [Star; 9] = [
    Star::Canopy,
    Star::Grass,
    Star::Impulse,
    Star::Assistant,
    Star::Connect,
    Star::Heart,
    Star::Pillar,
    Star::Ren,
    Star::Hero,
];

/// 休死傷杜中開驚生景; the fifth slot is the center placeholder.
const DOOR_RING: [Option<Door>; 9] = [
    Some(Door::Rest),
    Some(Door::Death),
    Some(Door::Harm),
    Some(Door::Delusion),
    None,
    Some(Door::Open),
    Some(Door::Fear),
    Some(Door::Life),
    Some(Door::Scenery),
];

/// 符蛇陰合勾雀地天, used for Ju 1..=5.
const DEITY_RING_LOW: [Deity; 8] = [
    Deity::Chief,
    Deity::Serpent,
    Deity::Moon,
    Deity::SixHarmony,
    Deity::Hook,
    Deity::Bird,
    Deity::NineEarth,
    Deity::NineHeaven,
];

/// 符蛇陰合虎玄地天, used for Ju 6..=9.
const DEITY_RING_HIGH: [Deity; 8] = [
    Deity::Chief,
    Deity::Serpent,
    Deity::Moon,
    Deity::SixHarmony,
    Deity::Tiger,
    Deity::Emptiness,
    Deity::NineEarth,
    Deity::NineHeaven,
];

/// Dun and Ju for a moment.
///
/// `day_num = (365 y + 30 m + d + h) mod 9 + 1`; months 1..=6 are Yang Dun
/// and use `day_num` directly, later months mirror it as `(10 - day_num) mod 9`
/// with 0 read as 9.
pub fn dun_and_ju(moment: &CivilDateTime) -> (Dun, u8) {
    let n = moment.year as i64 * 365
        + moment.month as i64 * 30
        + moment.day as i64
        + moment.hour as i64;
    let day_num = (n.rem_euclid(9) + 1) as u8;
    if moment.month <= 6 {
        (Dun::Yang, day_num)
    } else {
        match (10 - day_num) % 9 {
            0 => (Dun::Yin, 9),
            ju => (Dun::Yin, ju),
        }
    }
}

/// Element `i` of `ring` after rotating left by `shift`.
fn rotated<T: Copy, const N: usize>(ring: &[T; N], shift: usize, i: usize) -> T {
    ring[(i + shift) % N]
}

impl PlateLayout for RotationLayout {
    fn formation(&self, moment: &CivilDateTime) -> Formation {
        let (dun, ju) = dun_and_ju(moment);
        let hour = moment.hour as usize;
        let ju_us = ju as usize;

        let earth_ring = match dun {
            Dun::Yang => &EARTH_RING_YANG,
            Dun::Yin => &EARTH_RING_YIN,
        };
        let earth: [Stem; 9] = std::array::from_fn(|i| rotated(earth_ring, (ju_us - 1) % 9, i));
        let heaven: [Stem; 9] = std::array::from_fn(|i| rotated(&earth, hour % 9, i));

        let mut palaces = empty_slots();
        let shift9 = (ju_us + hour) % 9;
        for (i, slot) in palaces.iter_mut().enumerate() {
            slot.earth_stem = earth[i];
            slot.heaven_stem = heaven[i];
            slot.star = rotated(&STAR_RING, shift9, i);
            slot.door = rotated(&DOOR_RING, shift9, i);
        }

        let deity_ring = if ju <= 5 {
            &DEITY_RING_LOW
        } else {
            &DEITY_RING_HIGH
        };
        let shift8 = (ju_us + hour) % 8;
        for (j, palace) in OUTER_PALACES.iter().enumerate() {
            palaces[(palace.number() - 1) as usize].deity = Some(rotated(deity_ring, shift8, j));
        }

        Formation { dun, ju, palaces }
    }
}

/// Generate a chart with the default rotation layout.
pub fn generate(moment: &CivilDateTime, config: &QmdjConfig) -> QmdjChart {
    generate_with(&RotationLayout, moment, config)
}

/// Parse a `YYYY-MM-DDThh:mm` moment and generate its chart.
pub fn generate_from_str(moment: &str, config: &QmdjConfig) -> Result<QmdjChart, ChartError> {
    let moment: CivilDateTime = moment.parse()?;
    Ok(generate(&moment, config))
}

/// Generate a chart with a caller-supplied layout.
pub fn generate_with<L: PlateLayout + ?Sized>(
    layout: &L,
    moment: &CivilDateTime,
    config: &QmdjConfig,
) -> QmdjChart {
    let Formation { dun, ju, palaces } = layout.formation(moment);
    let metadata = chart_metadata(moment, config);
    let structure = format!("{}, Ju {}", dun.name(), ju);
    debug!(%moment, structure = %structure, method = config.method.name(), "qmdj chart generated");
    QmdjChart {
        moment: *moment,
        method: config.method,
        dun,
        ju,
        structure,
        palaces,
        metadata,
    }
}

/// Calendar context: pillars, Chinese hour, solar term, Xun of the hour pillar.
pub fn chart_metadata(moment: &CivilDateTime, config: &QmdjConfig) -> ChartMetadata {
    let pillars = four_pillars_at(moment, &config.pillars);
    // Hour is always known for a full moment.
    let hour_pillar = pillars.hour.unwrap_or(pillars.day);
    ChartMetadata {
        pillars,
        chinese_hour: hour_pillar.branch.chinese_hour(),
        solar_term: SolarTerm::approximate(moment.month, moment.day),
        xun_leader: hour_pillar.xun_leader(),
        void_branches: hour_pillar.void_branches(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ming_base::{ALL_DOORS, ALL_STARS, Palace};

    fn at(y: i32, m: u32, d: u32, h: u32) -> CivilDateTime {
        CivilDateTime::new(y, m, d, h, 0)
    }

    #[test]
    fn ju_formula_yang() {
        // 2024*365 + 30 + 1 + 0 = 738791; 738791 mod 9 = 8 -> day_num 9.
        assert_eq!(dun_and_ju(&at(2024, 1, 1, 0)), (Dun::Yang, 9));
    }

    #[test]
    fn ju_formula_yin_wraps_zero_to_nine() {
        // 2024*365 + 7*30 + 1 + 0 = 738971; mod 9 = 8 -> day_num 9 -> (10-9)%9 = 1.
        assert_eq!(dun_and_ju(&at(2024, 7, 1, 0)), (Dun::Yin, 1));
        // One hour later: mod 9 = 0 -> day_num 1 -> (10-1)%9 = 0 -> 9.
        assert_eq!(dun_and_ju(&at(2024, 7, 1, 1)), (Dun::Yin, 9));
    }

    #[test]
    fn ju_in_range_everywhere() {
        for m in 1..=12 {
            for h in 0..24 {
                let (dun, ju) = dun_and_ju(&at(1999, m, 17, h));
                assert!((1..=9).contains(&ju));
                assert_eq!(dun == Dun::Yang, m <= 6);
            }
        }
    }

    #[test]
    fn plates_are_permutations() {
        let chart = generate(&at(2024, 3, 15, 10), &QmdjConfig::default());
        for star in ALL_STARS {
            assert_eq!(chart.slots().filter(|s| s.star == star).count(), 1);
        }
        for door in ALL_DOORS {
            assert_eq!(chart.slots().filter(|s| s.door == Some(door)).count(), 1);
        }
        assert_eq!(chart.slots().filter(|s| s.door.is_none()).count(), 1);
        assert!(chart.slot(Palace::Center).deity.is_none());
        assert_eq!(chart.slots().filter(|s| s.deity.is_some()).count(), 8);
    }

    #[test]
    fn heaven_is_earth_rotated_by_hour() {
        let chart = generate(&at(2024, 3, 15, 11), &QmdjConfig::default());
        // 11 mod 9 = 2
        for i in 0..9 {
            assert_eq!(chart.palaces[i].heaven_stem, chart.palaces[(i + 2) % 9].earth_stem);
        }
    }

    #[test]
    fn zero_rotation_layout() {
        // Yang, Ju 1, hour 0 -> earth starts at 戊 in palace 1, heaven equals earth.
        let m = at(2024, 1, 2, 0); // 738792 mod 9 = 0 -> Ju 1.
        let chart = generate(&m, &QmdjConfig::default());
        assert_eq!((chart.dun, chart.ju), (Dun::Yang, 1));
        assert_eq!(chart.slot(Palace::Kan).earth_stem, Stem::Wu);
        assert_eq!(chart.slot(Palace::Li).earth_stem, Stem::Yi);
        assert_eq!(chart.slot(Palace::Kan).heaven_stem, Stem::Wu);
        // (1 + 0) % 9 = 1 -> star ring starts at 芮.
        assert_eq!(chart.slot(Palace::Kan).star, Star::Grass);
        assert_eq!(chart.slot(Palace::Kan).door, Some(Door::Death));
        assert_eq!(chart.slot(Palace::Xun).door, None);
        // (1 + 0) % 8 = 1 -> deities start at 蛇 in palace 1.
        assert_eq!(chart.slot(Palace::Kan).deity, Some(Deity::Serpent));
        assert_eq!(chart.slot(Palace::Li).deity, Some(Deity::Chief));
        assert_eq!(chart.structure, "Yang Dun, Ju 1");
        assert_eq!(chart.structure_chinese(), "陽遁第1局");
    }

    #[test]
    fn generate_from_text() {
        let a = generate_from_str("2024-03-15T10:00", &QmdjConfig::default()).unwrap();
        assert_eq!(a, generate(&at(2024, 3, 15, 10), &QmdjConfig::default()));
        assert!(matches!(
            generate_from_str("2024-02-30T10:00", &QmdjConfig::default()),
            Err(ChartError::Time(_))
        ));
    }

    #[test]
    fn metadata_uses_hour_pillar() {
        let chart = generate(&at(2024, 3, 20, 12), &QmdjConfig::default());
        let hp = chart.metadata.pillars.hour.unwrap();
        assert_eq!(chart.metadata.chinese_hour, "午時");
        assert_eq!(chart.metadata.xun_leader, hp.xun_leader());
        assert_eq!(chart.metadata.solar_term.glyph(), "春分");
    }
}
