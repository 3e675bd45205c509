//! Growth archetypes and the curve pairing behind them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    AGILITY_CURVE_1, AGILITY_CURVE_2, CLASS_COUNT, HP_CURVE_1, HP_CURVE_2, LEVEL_COUNT,
    MP_CURVE_1, MP_CURVE_2, STRENGTH_CURVE_1, STRENGTH_CURVE_2,
};
use crate::name::ClassIndex;

/// Growth archetype selecting which delta curve feeds each stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthType {
    A,
    B,
    C,
    D,
}

/// Archetype for each name class; the pattern repeats every four classes.
const GROWTH_TYPES: [GrowthType; CLASS_COUNT] = [
    GrowthType::A,
    GrowthType::B,
    GrowthType::C,
    GrowthType::D,
    GrowthType::A,
    GrowthType::B,
    GrowthType::C,
    GrowthType::D,
    GrowthType::A,
    GrowthType::B,
    GrowthType::C,
    GrowthType::D,
    GrowthType::A,
    GrowthType::B,
    GrowthType::C,
    GrowthType::D,
];

/// The four delta curves one archetype applies.
///
/// The pairing is the game's own and is uneven on purpose: strength and HP
/// do not always share a curve number. Copied from the original tables,
/// never derived.
pub(crate) struct CurveSet {
    pub strength: &'static [u16; LEVEL_COUNT],
    pub agility: &'static [u16; LEVEL_COUNT],
    pub hp: &'static [u16; LEVEL_COUNT],
    pub mp: &'static [u16; LEVEL_COUNT],
}

impl GrowthType {
    /// Look up the archetype for a name class.
    #[must_use]
    pub fn for_index(index: ClassIndex) -> Self {
        GROWTH_TYPES[index.as_usize()]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    pub(crate) const fn curves(self) -> CurveSet {
        match self {
            Self::A => CurveSet {
                strength: &STRENGTH_CURVE_1,
                agility: &AGILITY_CURVE_2,
                hp: &HP_CURVE_1,
                mp: &MP_CURVE_2,
            },
            Self::B => CurveSet {
                strength: &STRENGTH_CURVE_2,
                agility: &AGILITY_CURVE_1,
                hp: &HP_CURVE_2,
                mp: &MP_CURVE_1,
            },
            Self::C => CurveSet {
                strength: &STRENGTH_CURVE_1,
                agility: &AGILITY_CURVE_1,
                hp: &HP_CURVE_2,
                mp: &MP_CURVE_2,
            },
            Self::D => CurveSet {
                strength: &STRENGTH_CURVE_2,
                agility: &AGILITY_CURVE_2,
                hp: &HP_CURVE_1,
                mp: &MP_CURVE_1,
            },
        }
    }
}

impl fmt::Display for GrowthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(()),
        }
    }
}
