//! Ten Gods (十神): the relationship of any stem to the Day Master.
//!
//! The target element is placed on the five-element cycle relative to the
//! Day Master's element, which picks one of five categories. Polarity then
//! splits each category in two: matching polarity gives the "indirect" or
//! harsher member, opposite polarity the "direct" one.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::{ALL_STEMS, Stem};

/// Relationship category, one per position on the element cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGodCategory {
    /// Same element as the Day Master.
    Companion,
    /// Produces the Day Master.
    Resource,
    /// Produced by the Day Master.
    Output,
    /// Controlled by the Day Master.
    Wealth,
    /// Controls the Day Master.
    Authority,
}

/// All 5 categories.
pub const ALL_TEN_GOD_CATEGORIES: [TenGodCategory; 5] = [
    TenGodCategory::Companion,
    TenGodCategory::Resource,
    TenGodCategory::Output,
    TenGodCategory::Wealth,
    TenGodCategory::Authority,
];

impl TenGodCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::Resource => "Resource",
            Self::Output => "Output",
            Self::Wealth => "Wealth",
            Self::Authority => "Authority",
        }
    }

    /// Category of `target` relative to a Day Master element.
    pub const fn of(dm: Element, target: Element) -> Self {
        let d = (target.index() + 5 - dm.index()) % 5;
        match d {
            0 => Self::Companion,
            1 => Self::Output,
            2 => Self::Wealth,
            3 => Self::Authority,
            _ => Self::Resource,
        }
    }

    /// The element that plays this role for a Day Master element.
    pub const fn element_for(self, dm: Element) -> Element {
        match self {
            Self::Companion => dm,
            Self::Resource => dm.produced_by(),
            Self::Output => dm.produces(),
            Self::Wealth => dm.controls(),
            Self::Authority => dm.controlled_by(),
        }
    }
}

/// One of the ten relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    RobWealth,
    Friend,
    IndirectResource,
    DirectResource,
    HurtingOfficer,
    EatingGod,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
}

/// All 10 Ten Gods in canonical order (also the tie-break order).
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::RobWealth,
    TenGod::Friend,
    TenGod::IndirectResource,
    TenGod::DirectResource,
    TenGod::HurtingOfficer,
    TenGod::EatingGod,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RobWealth => "Rob Wealth",
            Self::Friend => "Friend",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
            Self::HurtingOfficer => "Hurting Officer",
            Self::EatingGod => "Eating God",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "7 Killings",
            Self::DirectOfficer => "Direct Officer",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::RobWealth => "劫财",
            Self::Friend => "比肩",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
            Self::HurtingOfficer => "伤官",
            Self::EatingGod => "食神",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
        }
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::RobWealth => "Jie Cai",
            Self::Friend => "Bi Jian",
            Self::IndirectResource => "Pian Yin",
            Self::DirectResource => "Zheng Yin",
            Self::HurtingOfficer => "Shang Guan",
            Self::EatingGod => "Shi Shen",
            Self::IndirectWealth => "Pian Cai",
            Self::DirectWealth => "Zheng Cai",
            Self::SevenKillings => "Qi Sha",
            Self::DirectOfficer => "Zheng Guan",
        }
    }

    /// Position in [`ALL_TEN_GODS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn category(self) -> TenGodCategory {
        match self {
            Self::RobWealth | Self::Friend => TenGodCategory::Companion,
            Self::IndirectResource | Self::DirectResource => TenGodCategory::Resource,
            Self::HurtingOfficer | Self::EatingGod => TenGodCategory::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodCategory::Wealth,
            Self::SevenKillings | Self::DirectOfficer => TenGodCategory::Authority,
        }
    }

    /// Personality archetype associated with a dominant Ten God.
    pub fn profile(self) -> &'static TenGodProfile {
        &TEN_GOD_PROFILES[self.index() as usize]
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a target stem's (element, polarity) against the Day Master's.
///
/// Total over all 100 inputs.
pub const fn classify(
    dm_element: Element,
    dm_polarity: Polarity,
    target_element: Element,
    target_polarity: Polarity,
) -> TenGod {
    let same = matches!(
        (dm_polarity, target_polarity),
        (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
    );
    match (TenGodCategory::of(dm_element, target_element), same) {
        (TenGodCategory::Companion, true) => TenGod::RobWealth,
        (TenGodCategory::Companion, false) => TenGod::Friend,
        (TenGodCategory::Resource, true) => TenGod::IndirectResource,
        (TenGodCategory::Resource, false) => TenGod::DirectResource,
        (TenGodCategory::Output, true) => TenGod::HurtingOfficer,
        (TenGodCategory::Output, false) => TenGod::EatingGod,
        (TenGodCategory::Wealth, true) => TenGod::IndirectWealth,
        (TenGodCategory::Wealth, false) => TenGod::DirectWealth,
        (TenGodCategory::Authority, true) => TenGod::SevenKillings,
        (TenGodCategory::Authority, false) => TenGod::DirectOfficer,
    }
}

/// Ten God of `target` for the Day Master stem `dm`.
pub const fn ten_god_of(dm: Stem, target: Stem) -> TenGod {
    classify(dm.element(), dm.polarity(), target.element(), target.polarity())
}

/// Ten God of every stem for a Day Master, in stem order.
pub fn ten_god_map(dm: Stem) -> [(Stem, TenGod); 10] {
    ALL_STEMS.map(|s| (s, ten_god_of(dm, s)))
}

/// Archetype description attached to a Ten God.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenGodProfile {
    pub profile_name: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

static TEN_GOD_PROFILES: [TenGodProfile; 10] = [
    TenGodProfile {
        profile_name: "Competitor",
        traits: &["Competitive", "Independent", "Self-reliant", "Aggressive in pursuit"],
        strengths: &["Self-motivation", "Resilience", "Determination"],
        challenges: &["Sharing", "Collaboration", "Trust issues"],
    },
    TenGodProfile {
        profile_name: "Companion",
        traits: &["Loyal", "Supportive", "Team-oriented", "Consistent"],
        strengths: &["Reliability", "Friendship", "Stability"],
        challenges: &["Standing out", "Taking initiative", "Independence"],
    },
    TenGodProfile {
        profile_name: "Strategist",
        traits: &["Analytical", "Strategic", "Unconventional thinker", "Reserved"],
        strengths: &["Problem-solving", "Innovation", "Deep thinking"],
        challenges: &["Overthinking", "Isolation", "Communication"],
    },
    TenGodProfile {
        profile_name: "Nurturer",
        traits: &["Caring", "Supportive", "Traditional", "Patient"],
        strengths: &["Teaching", "Patience", "Emotional support"],
        challenges: &["Boundaries", "Self-care", "Dependency"],
    },
    TenGodProfile {
        profile_name: "Maverick",
        traits: &["Creative", "Rebellious", "Outspoken", "Innovative"],
        strengths: &["Creativity", "Breaking conventions", "Expression"],
        challenges: &["Authority conflicts", "Diplomacy", "Patience"],
    },
    TenGodProfile {
        profile_name: "Artist",
        traits: &["Creative", "Gentle", "Pleasure-seeking", "Expressive"],
        strengths: &["Artistic ability", "Enjoyment of life", "Charm"],
        challenges: &["Discipline", "Focus", "Practical matters"],
    },
    TenGodProfile {
        profile_name: "Pioneer",
        traits: &["Risk-taking", "Opportunity-seeking", "Unconventional", "Bold"],
        strengths: &["Spotting opportunities", "Quick decisions", "Networking"],
        challenges: &["Impulsivity", "Long-term planning", "Saving"],
    },
    TenGodProfile {
        profile_name: "Manager",
        traits: &["Practical", "Hardworking", "Responsible", "Methodical"],
        strengths: &["Financial management", "Reliability", "Steady growth"],
        challenges: &["Risk-taking", "Flexibility", "Innovation"],
    },
    TenGodProfile {
        profile_name: "Warrior",
        traits: &["Ambitious", "Driven", "Competitive", "Intense"],
        strengths: &["Leadership under pressure", "Courage", "Transformation"],
        challenges: &["Aggression", "Conflict", "Burnout"],
    },
    TenGodProfile {
        profile_name: "Leader",
        traits: &["Responsible", "Principled", "Authoritative", "Structured"],
        strengths: &["Leadership", "Organization", "Ethics"],
        challenges: &["Flexibility", "Creativity", "Relaxation"],
    },
];
