//! Erdrick core engine
//!
//! Platform-agnostic logic for the Dragon Warrior hero-name stat
//! calculator. The pipeline is a pure function of its input: the first four
//! characters of a name hash into a class index in `0..16`, the index
//! selects a starting stat line and a growth archetype, and the archetype
//! expands into the 30-row leveling table. This crate provides the whole
//! pipeline without UI or platform-specific dependencies.

pub mod constants;
pub mod growth;
pub mod name;
pub mod spell;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use constants::{CLASS_COUNT, LEVEL_COUNT};
pub use growth::GrowthType;
pub use name::{ClassIndex, NameError, SIGNIFICANT_CHARS, char_value, classify};
pub use spell::Spell;
pub use stats::InitialStats;
pub use table::{LevelRow, StatTable, blank_skeleton, generate};

use serde::{Deserialize, Serialize};

/// Outcome of the full name-to-table pipeline.
///
/// Rejected names still carry a renderable table: the levels-and-experience
/// skeleton that front ends show alongside the error notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lookup {
    /// The name classified; the table is fully populated.
    Table {
        index: ClassIndex,
        growth: GrowthType,
        table: StatTable,
    },
    /// The name was rejected; the skeleton stands in for the table.
    Blank { error: NameError, table: StatTable },
}

/// Run the full pipeline for a raw name string.
#[must_use]
pub fn lookup(name: &str) -> Lookup {
    match classify(name) {
        Ok(index) => Lookup::Table {
            index,
            growth: GrowthType::for_index(index),
            table: generate(index),
        },
        Err(error) => Lookup::Blank {
            error,
            table: blank_skeleton(),
        },
    }
}
