//! Types for nine-palace (QMDJ) charts.

use serde::{Deserialize, Serialize};

use ming_base::{ALL_PALACES, Branch, Deity, Door, Palace, Pillar, SolarTerm, Star, Stem};
use ming_time::CivilDateTime;

use crate::pillars::{FourPillars, PillarConfig};

/// Escaping direction (遁) of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dun {
    Yang,
    Yin,
}

impl Dun {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang Dun",
            Self::Yin => "Yin Dun",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Yang => "陽遁",
            Self::Yin => "陰遁",
        }
    }
}

/// Chart-plotting method label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartMethod {
    /// 拆補, method 1.
    #[default]
    ChaiBu,
    /// 置閏, method 2.
    ZhiRun,
}

impl ChartMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChaiBu => "Chai Bu",
            Self::ZhiRun => "Zhi Run",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::ChaiBu => "拆補",
            Self::ZhiRun => "置閏",
        }
    }

    /// 1 = Chai Bu, 2 = Zhi Run.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::ChaiBu),
            2 => Some(Self::ZhiRun),
            _ => None,
        }
    }
}

/// Configuration for chart generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QmdjConfig {
    pub method: ChartMethod,
    /// Used for the Ganzhi shown in chart metadata.
    pub pillars: PillarConfig,
}

/// Everything placed in one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalaceSlot {
    pub palace: Palace,
    pub heaven_stem: Stem,
    pub earth_stem: Stem,
    pub star: Star,
    /// `None` where the door ring's center placeholder lands.
    pub door: Option<Door>,
    /// Always `None` for palace 5.
    pub deity: Option<Deity>,
}

/// Dun, Ju and the nine palace slots produced by a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Formation {
    pub dun: Dun,
    /// 1..=9.
    pub ju: u8,
    /// Indexed by palace number - 1.
    pub palaces: [PalaceSlot; 9],
}

/// Calendar context of the chart's moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartMetadata {
    pub pillars: FourPillars,
    /// e.g. `"午時"`.
    pub chinese_hour: String,
    pub solar_term: SolarTerm,
    /// Decade leader of the hour pillar.
    pub xun_leader: Pillar,
    /// Void branches of the hour pillar's decade.
    pub void_branches: [Branch; 2],
}

/// A nine-palace chart for one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QmdjChart {
    pub moment: CivilDateTime,
    pub method: ChartMethod,
    pub dun: Dun,
    pub ju: u8,
    /// e.g. `"Yang Dun, Ju 3"`.
    pub structure: String,
    pub palaces: [PalaceSlot; 9],
    pub metadata: ChartMetadata,
}

impl QmdjChart {
    pub const fn slot(&self, palace: Palace) -> &PalaceSlot {
        &self.palaces[(palace.number() - 1) as usize]
    }

    /// e.g. `"陽遁第3局"`.
    pub fn structure_chinese(&self) -> String {
        format!("{}第{}局", self.dun.chinese(), self.ju)
    }

    pub fn slots(&self) -> impl Iterator<Item = &PalaceSlot> {
        self.palaces.iter()
    }
}

/// Slot array with every palace set and placeholder contents.
pub(crate) fn empty_slots() -> [PalaceSlot; 9] {
    ALL_PALACES.map(|palace| PalaceSlot {
        palace,
        heaven_stem: Stem::Wu,
        earth_stem: Stem::Wu,
        star: Star::Canopy,
        door: None,
        deity: None,
    })
}
