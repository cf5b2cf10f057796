//! Palace scoring: component strengths, normalized score, verdict and
//! plain-language guidance for one palace of a chart.

use serde::Serialize;

use ming_base::{
    Door, Element, NO_DOOR_ADVICE, Nature, Palace, Star, Stem, Strength, Topic,
    component_strength,
};

use crate::bazi::round1;
use crate::error::ChartError;
use crate::qmdj_types::{PalaceSlot, QmdjChart};

/// Element used to score the center placeholder of the door ring.
pub const CENTER_DOOR_ELEMENT: Element = Element::Earth;

/// Largest absolute component total: four components at +/-3.
pub const MAX_COMPONENT_TOTAL: i32 = 12;

/// The four scored components of a palace. The deity is not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    HeavenStem,
    EarthStem,
    Star,
    Door,
}

pub const ALL_COMPONENT_KINDS: [ComponentKind; 4] = [
    ComponentKind::HeavenStem,
    ComponentKind::EarthStem,
    ComponentKind::Star,
    ComponentKind::Door,
];

impl ComponentKind {
    /// Snake-case key, e.g. `"heaven_stem"`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::HeavenStem => "heaven_stem",
            Self::EarthStem => "earth_stem",
            Self::Star => "star",
            Self::Door => "door",
        }
    }
}

/// Element of each scored component of a slot, in [`ALL_COMPONENT_KINDS`] order.
pub fn component_elements(slot: &PalaceSlot) -> [(ComponentKind, Element); 4] {
    [
        (ComponentKind::HeavenStem, slot.heaven_stem.element()),
        (ComponentKind::EarthStem, slot.earth_stem.element()),
        (ComponentKind::Star, slot.star.element()),
        (
            ComponentKind::Door,
            slot.door.map_or(CENTER_DOOR_ELEMENT, Door::element),
        ),
    ]
}

/// One scored component inside its palace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentReading {
    pub kind: ComponentKind,
    pub glyph: String,
    /// Pinyin for stems, English name for stars and doors.
    pub name: String,
    pub element: Element,
    /// Stems carry no nature.
    pub nature: Option<Nature>,
    pub strength: Strength,
    pub score: i32,
    pub friendly_strength: &'static str,
    pub advice: &'static str,
}

impl ComponentReading {
    fn new(
        kind: ComponentKind,
        glyph: String,
        name: String,
        element: Element,
        nature: Option<Nature>,
        palace: Palace,
    ) -> Self {
        let strength = component_strength(element, palace.element());
        let (friendly_strength, advice) = strength.friendly();
        Self {
            kind,
            glyph,
            name,
            element,
            nature,
            strength,
            score: strength.score(),
            friendly_strength,
            advice,
        }
    }

    fn stem(kind: ComponentKind, stem: Stem, palace: Palace) -> Self {
        Self::new(
            kind,
            stem.glyph().to_string(),
            stem.pinyin().to_string(),
            stem.element(),
            None,
            palace,
        )
    }

    fn star(star: Star, palace: Palace) -> Self {
        Self::new(
            ComponentKind::Star,
            star.chinese(),
            star.name().to_string(),
            star.element(),
            Some(star.nature()),
            palace,
        )
    }

    fn door(door: Option<Door>, palace: Palace) -> Self {
        match door {
            Some(d) => Self::new(
                ComponentKind::Door,
                d.chinese(),
                d.friendly_name().to_string(),
                d.element(),
                Some(d.nature()),
                palace,
            ),
            None => Self::new(
                ComponentKind::Door,
                "中".to_string(),
                "Center".to_string(),
                CENTER_DOOR_ELEMENT,
                Some(Nature::Neutral),
                palace,
            ),
        }
    }
}

/// Overall verdict of a normalized palace score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    VeryFavorable,
    Favorable,
    Neutral,
    Challenging,
    VeryChallenging,
}

/// Display tone attached to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Info,
    Warning,
}

impl Verdict {
    /// `>= 8` Very Favorable, `>= 6` Favorable, `>= 4` Neutral,
    /// `>= 2` Challenging, below that Very Challenging.
    pub fn from_score(normalized: f64) -> Self {
        if normalized >= 8.0 {
            Self::VeryFavorable
        } else if normalized >= 6.0 {
            Self::Favorable
        } else if normalized >= 4.0 {
            Self::Neutral
        } else if normalized >= 2.0 {
            Self::Challenging
        } else {
            Self::VeryChallenging
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryFavorable => "Very Favorable",
            Self::Favorable => "Favorable",
            Self::Neutral => "Neutral",
            Self::Challenging => "Challenging",
            Self::VeryChallenging => "Very Challenging",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::VeryFavorable | Self::Favorable => Tone::Success,
            Self::Neutral => Tone::Info,
            Self::Challenging | Self::VeryChallenging => Tone::Warning,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a component total in `-12..=12` onto `1.0..=10.0`, one decimal.
pub fn normalize_score(total: i32) -> f64 {
    let max = MAX_COMPONENT_TOTAL as f64;
    round1(((total as f64 + max) / (2.0 * max)) * 9.0 + 1.0).clamp(1.0, 10.0)
}

/// Sum of the four component scores of a slot.
pub fn component_total(slot: &PalaceSlot) -> i32 {
    component_elements(slot)
        .iter()
        .map(|&(_, el)| component_strength(el, slot.palace.element()).score())
        .sum()
}

/// Normalized score of a slot.
pub fn palace_score(slot: &PalaceSlot) -> f64 {
    normalize_score(component_total(slot))
}

/// Static description of a palace and its topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalaceInfo {
    pub number: u8,
    pub name: &'static str,
    pub glyph: char,
    pub direction: &'static str,
    pub element: Element,
    pub topic: Topic,
    pub description: &'static str,
}

impl From<Palace> for PalaceInfo {
    fn from(p: Palace) -> Self {
        Self {
            number: p.number(),
            name: p.name(),
            glyph: p.glyph(),
            direction: p.direction(),
            element: p.element(),
            topic: p.topic(),
            description: p.topic().description(),
        }
    }
}

/// Deity of a palace with its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeityReading {
    pub glyph: char,
    pub name: &'static str,
    pub nature: Nature,
    pub function: &'static str,
}

/// Full reading of one palace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalaceReading {
    pub palace: PalaceInfo,
    /// Heaven stem, earth stem, star, door.
    pub components: [ComponentReading; 4],
    /// `None` for palace 5.
    pub deity: Option<DeityReading>,
    pub component_total: i32,
    pub normalized: f64,
    pub verdict: Verdict,
    pub tone: Tone,
    pub summary: String,
    pub advice: String,
}

impl PalaceReading {
    pub fn component(&self, kind: ComponentKind) -> &ComponentReading {
        // Components are stored in ALL_COMPONENT_KINDS order.
        &self.components[kind as usize]
    }
}

/// Read a palace of a chart.
pub fn read_palace(chart: &QmdjChart, palace: Palace) -> PalaceReading {
    let slot = chart.slot(palace);
    let components = [
        ComponentReading::stem(ComponentKind::HeavenStem, slot.heaven_stem, palace),
        ComponentReading::stem(ComponentKind::EarthStem, slot.earth_stem, palace),
        ComponentReading::star(slot.star, palace),
        ComponentReading::door(slot.door, palace),
    ];
    let component_total: i32 = components.iter().map(|c| c.score).sum();
    let normalized = normalize_score(component_total);
    let verdict = Verdict::from_score(normalized);
    let deity = slot.deity.map(|d| DeityReading {
        glyph: d.glyph(),
        name: d.name(),
        nature: d.nature(),
        function: d.function(),
    });
    PalaceReading {
        palace: palace.into(),
        summary: summary_text(slot),
        advice: advice_text(slot.door, normalized),
        components,
        deity,
        component_total,
        normalized,
        verdict,
        tone: verdict.tone(),
    }
}

/// Read a palace by its Luo Shu number.
pub fn read_palace_number(chart: &QmdjChart, number: u8) -> Result<PalaceReading, ChartError> {
    let palace = Palace::from_number(number).ok_or(ChartError::InvalidPalace(number))?;
    Ok(read_palace(chart, palace))
}

/// One-sentence characterisation from door and star nature.
pub fn summary_text(slot: &PalaceSlot) -> String {
    let door_name = slot.door.map_or("Center", Door::friendly_name);
    let door_nature = slot.door.map_or(Nature::Neutral, Door::nature);
    let star_name = slot.star.name();
    let star_nature = slot.star.nature();

    match (door_nature, star_nature) {
        (Nature::Auspicious, Nature::Auspicious) => {
            let mut s = format!(
                "{door_name} Door with {star_name} Star creates a favorable combination."
            );
            if let Some(deity) = slot.deity {
                s.push_str(&format!(" {} Spirit adds supportive energy.", deity.name()));
            }
            s
        }
        (Nature::Inauspicious, _) | (_, Nature::Inauspicious) => format!(
            "{door_name} Door with {star_name} Star suggests caution. Consider timing and approach carefully."
        ),
        _ => format!(
            "{door_name} Door with {star_name} Star indicates balanced energy. Proceed with awareness."
        ),
    }
}

/// Door advice, qualified by the normalized score.
pub fn advice_text(door: Option<Door>, normalized: f64) -> String {
    let base = door.map_or(NO_DOOR_ADVICE, Door::advice);
    if normalized >= 7.0 {
        format!("{base} Energy strongly supports your goals.")
    } else if normalized >= 5.0 {
        base.to_string()
    } else {
        format!("{base} Consider waiting for more favorable conditions.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qmdj::generate;
    use crate::qmdj_types::QmdjConfig;
    use ming_base::ALL_PALACES;
    use ming_time::CivilDateTime;

    #[test]
    fn normalize_bounds_and_midpoint() {
        assert_eq!(normalize_score(-12), 1.0);
        assert_eq!(normalize_score(12), 10.0);
        assert_eq!(normalize_score(0), 5.5);
        assert_eq!(normalize_score(1), 5.9);
        for t in -30..=30 {
            let n = normalize_score(t);
            assert!((1.0..=10.0).contains(&n));
        }
    }

    #[test]
    fn zero_total_is_neutral() {
        let v = Verdict::from_score(normalize_score(0));
        assert_eq!(v, Verdict::Neutral);
        assert_eq!(v.tone(), Tone::Info);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_score(8.0), Verdict::VeryFavorable);
        assert_eq!(Verdict::from_score(7.9), Verdict::Favorable);
        assert_eq!(Verdict::from_score(6.0), Verdict::Favorable);
        assert_eq!(Verdict::from_score(4.0), Verdict::Neutral);
        assert_eq!(Verdict::from_score(2.0), Verdict::Challenging);
        assert_eq!(Verdict::from_score(1.9), Verdict::VeryChallenging);
    }

    #[test]
    fn advice_qualifiers() {
        let open = Some(Door::Open);
        assert!(advice_text(open, 7.0).ends_with("Energy strongly supports your goals."));
        assert_eq!(advice_text(open, 5.0), Door::Open.advice());
        assert!(advice_text(open, 4.9).ends_with("Consider waiting for more favorable conditions."));
        assert!(advice_text(None, 5.5).starts_with(NO_DOOR_ADVICE));
    }

    #[test]
    fn reading_is_consistent_with_slot() {
        let chart = generate(&CivilDateTime::new(2024, 5, 10, 14, 0), &QmdjConfig::default());
        for palace in ALL_PALACES {
            let r = read_palace(&chart, palace);
            let slot = chart.slot(palace);
            assert_eq!(r.component_total, component_total(slot));
            assert_eq!(r.normalized, palace_score(slot));
            assert_eq!(r.deity.is_some(), palace.has_deity());
            assert_eq!(r.component(ComponentKind::Star).name, slot.star.name());
            for c in &r.components {
                assert!([-3, -2, 0, 2, 3].contains(&c.score));
            }
        }
    }

    #[test]
    fn invalid_palace_number() {
        let chart = generate(&CivilDateTime::new(2024, 5, 10, 14, 0), &QmdjConfig::default());
        assert_eq!(
            read_palace_number(&chart, 10).unwrap_err(),
            ChartError::InvalidPalace(10)
        );
        assert_eq!(read_palace_number(&chart, 9).unwrap().palace.number, 9);
    }

    #[test]
    fn summary_caution_on_inauspicious() {
        let slot = PalaceSlot {
            palace: Palace::Kan,
            heaven_stem: Stem::Jia,
            earth_stem: Stem::Wu,
            star: Star::Heart,
            door: Some(Door::Death),
            deity: None,
        };
        assert!(summary_text(&slot).contains("suggests caution"));
    }
}
