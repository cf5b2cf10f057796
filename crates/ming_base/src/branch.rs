//! The twelve Earthly Branches (地支), their hidden stems, seasons and
//! two-hour windows.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::ParseError;
use crate::stem::Stem;

/// An Earthly Branch. Index 0 = Zi (子) .. 11 = Hai (亥).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_GLYPHS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Season of the year a branch (as a month) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

impl Branch {
    /// 0-based cycle index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for any integer position in the 12-cycle.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    pub const fn glyph(self) -> char {
        BRANCH_GLYPHS[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    /// Odd-indexed branches are Yin.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    /// Stems stored inside the branch, main qi first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        match self {
            Self::Zi => &[Stem::Gui],
            Self::Chou => &[Stem::Ji, Stem::Gui, Stem::Xin],
            Self::Yin => &[Stem::Jia, Stem::Bing, Stem::Wu],
            Self::Mao => &[Stem::Yi],
            Self::Chen => &[Stem::Wu, Stem::Yi, Stem::Gui],
            Self::Si => &[Stem::Bing, Stem::Geng, Stem::Wu],
            Self::Wu => &[Stem::Ding, Stem::Ji],
            Self::Wei => &[Stem::Ji, Stem::Ding, Stem::Yi],
            Self::Shen => &[Stem::Geng, Stem::Ren, Stem::Wu],
            Self::You => &[Stem::Xin],
            Self::Xu => &[Stem::Wu, Stem::Xin, Stem::Ding],
            Self::Hai => &[Stem::Ren, Stem::Jia],
        }
    }

    /// Season of the branch taken as a month: 寅卯辰 spring, 巳午未 summer,
    /// 申酉戌 autumn, 亥子丑 winter.
    pub const fn season(self) -> Season {
        match self {
            Self::Yin | Self::Mao | Self::Chen => Season::Spring,
            Self::Si | Self::Wu | Self::Wei => Season::Summer,
            Self::Shen | Self::You | Self::Xu => Season::Autumn,
            Self::Hai | Self::Zi | Self::Chou => Season::Winter,
        }
    }

    /// Branch of the two-hour window containing a civil hour (0..=23).
    ///
    /// 子 spans 23:00 to 00:59, so both hour 23 and hour 0 map to Zi.
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= 23 || hour == 0 {
            Self::Zi
        } else {
            ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
        }
    }

    /// Civil hours `(start, end)` covered by this branch's window, inclusive.
    pub const fn hour_window(self) -> (u32, u32) {
        let start = (self.index() as u32 * 2 + 23) % 24;
        (start, (start + 1) % 24)
    }

    /// Chinese-hour name, e.g. `"子時"`.
    pub fn chinese_hour(self) -> String {
        format!("{}時", self.glyph())
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        BRANCH_GLYPHS
            .iter()
            .position(|&g| g == c)
            .map(|i| ALL_BRANCHES[i])
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Branch {
    type Err = ParseError;

    /// Accepts the glyph (子), pinyin (Zi) or animal (Rat), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(b) = Self::from_glyph(c) {
                return Ok(b);
            }
        }
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.pinyin().eq_ignore_ascii_case(t) || b.animal().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseError::UnknownBranch(s.to_string()))
    }
}
