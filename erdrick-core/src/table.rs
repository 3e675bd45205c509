//! Stat table assembly and the blank fallback skeleton.

use serde::{Deserialize, Serialize};

use crate::constants::{EXPERIENCE_POINTS, LEVEL_COUNT};
use crate::growth::GrowthType;
use crate::name::ClassIndex;
use crate::spell::{SPELLS_LEARNED, Spell};
use crate::stats::InitialStats;

/// One row of the leveling table.
///
/// Stat columns are `None` only in the blank skeleton rendered on the
/// empty/invalid-name path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    pub level: u8,
    pub experience: u16,
    pub strength: Option<u16>,
    pub agility: Option<u16>,
    pub hp: Option<u16>,
    pub mp: Option<u16>,
    pub spell: Option<Spell>,
}

/// Ordered leveling table, always exactly [`LEVEL_COUNT`] rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable {
    pub rows: Vec<LevelRow>,
}

impl StatTable {
    /// Serialize the table as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn row_level(offset: usize) -> u8 {
    // Offsets stay below LEVEL_COUNT, comfortably inside u8.
    offset as u8 + 1
}

/// Build the full leveling table for a name class.
///
/// Infallible: the class index is already reduced into table range and
/// every lookup table carries exactly one entry per class or level.
#[must_use]
pub fn generate(index: ClassIndex) -> StatTable {
    let start = InitialStats::for_index(index);
    let curves = GrowthType::for_index(index).curves();
    let rows = (0..LEVEL_COUNT)
        .map(|x| LevelRow {
            level: row_level(x),
            experience: EXPERIENCE_POINTS[x],
            strength: Some(start.strength + curves.strength[x]),
            agility: Some(start.agility + curves.agility[x]),
            hp: Some(start.hp + curves.hp[x]),
            mp: Some(start.mp + curves.mp[x]),
            spell: SPELLS_LEARNED[x],
        })
        .collect();
    StatTable { rows }
}

/// Build the levels-and-experience skeleton shown when no valid name is
/// available.
#[must_use]
pub fn blank_skeleton() -> StatTable {
    let rows = (0..LEVEL_COUNT)
        .map(|x| LevelRow {
            level: row_level(x),
            experience: EXPERIENCE_POINTS[x],
            strength: None,
            agility: None,
            hp: None,
            mp: None,
            spell: None,
        })
        .collect();
    StatTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_one_row_reproduces_starting_stats() {
        let index = ClassIndex::from_sum(9);
        let table = generate(index);
        let start = InitialStats::for_index(index);
        let first = table.rows[0];
        assert_eq!(first.level, 1);
        assert_eq!(first.experience, 0);
        assert_eq!(first.strength, Some(start.strength));
        assert_eq!(first.agility, Some(start.agility));
        assert_eq!(first.hp, Some(start.hp));
        assert_eq!(first.mp, Some(start.mp));
        assert_eq!(first.spell, None);
    }

    #[test]
    fn level_two_row_applies_the_paired_curves() {
        // Class 9 is growth type B: STR-2 / AGI-1 / HP-2 / MP-1.
        let table = generate(ClassIndex::from_sum(9));
        let second = table.rows[1];
        assert_eq!(second.level, 2);
        assert_eq!(second.experience, 7);
        assert_eq!(second.strength, Some(4 + 1));
        assert_eq!(second.agility, Some(5));
        assert_eq!(second.hp, Some(15 + 6));
        assert_eq!(second.mp, Some(6));
    }

    #[test]
    fn type_c_class_mixes_first_and_second_curves() {
        // Class 2 is growth type C: STR-1 / AGI-1 / HP-2 / MP-2.
        let table = generate(ClassIndex::from_sum(2));
        let fourth = table.rows[3];
        assert_eq!(fourth.strength, Some(3 + 3));
        assert_eq!(fourth.agility, Some(4 + 4));
        assert_eq!(fourth.hp, Some(13 + 14));
        assert_eq!(fourth.mp, Some(5 + 10));
    }

    #[test]
    fn blank_skeleton_keeps_only_levels_and_experience() {
        let skeleton = blank_skeleton();
        assert_eq!(skeleton.rows.len(), LEVEL_COUNT);
        for (x, row) in skeleton.rows.iter().enumerate() {
            assert_eq!(usize::from(row.level), x + 1);
            assert_eq!(row.strength, None);
            assert_eq!(row.agility, None);
            assert_eq!(row.hp, None);
            assert_eq!(row.mp, None);
            assert_eq!(row.spell, None);
        }
        assert_eq!(skeleton.rows[LEVEL_COUNT - 1].experience, u16::MAX);
    }

    #[test]
    fn table_serializes_and_round_trips() {
        let table = generate(ClassIndex::from_sum(12));
        let json = table.to_json().unwrap();
        let back: StatTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
