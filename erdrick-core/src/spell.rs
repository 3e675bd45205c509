//! Spells the hero learns while leveling.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::LEVEL_COUNT;

/// A spell learned at a fixed level, independent of name class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Spell {
    Heal,
    Hurt,
    Sleep,
    Radiant,
    Stopspell,
    Outside,
    Return,
    Repel,
    Healmore,
    Hurtmore,
}

impl Spell {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heal => "HEAL",
            Self::Hurt => "HURT",
            Self::Sleep => "SLEEP",
            Self::Radiant => "RADIANT",
            Self::Stopspell => "STOPSPELL",
            Self::Outside => "OUTSIDE",
            Self::Return => "RETURN",
            Self::Repel => "REPEL",
            Self::Healmore => "HEALMORE",
            Self::Hurtmore => "HURTMORE",
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spell learned on each table row, by row offset. Most rows teach nothing.
pub(crate) const SPELLS_LEARNED: [Option<Spell>; LEVEL_COUNT] = [
    None,
    None,
    Some(Spell::Heal),
    Some(Spell::Hurt),
    None,
    None,
    Some(Spell::Sleep),
    None,
    Some(Spell::Radiant),
    Some(Spell::Stopspell),
    None,
    Some(Spell::Outside),
    Some(Spell::Return),
    None,
    Some(Spell::Repel),
    None,
    Some(Spell::Healmore),
    None,
    Some(Spell::Hurtmore),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];
