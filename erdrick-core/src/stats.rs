//! Starting stat lines keyed by name class.

use serde::{Deserialize, Serialize};

use crate::constants::{STARTING_AGILITY, STARTING_HP, STARTING_MP, STARTING_STRENGTH};
use crate::name::ClassIndex;

/// Level-1 stat line for one name class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialStats {
    pub strength: u16,
    pub agility: u16,
    pub hp: u16,
    pub mp: u16,
}

impl InitialStats {
    /// Look up the starting stats for a name class.
    #[must_use]
    pub fn for_index(index: ClassIndex) -> Self {
        let i = index.as_usize();
        Self {
            strength: STARTING_STRENGTH[i],
            agility: STARTING_AGILITY[i],
            hp: STARTING_HP[i],
            mp: STARTING_MP[i],
        }
    }
}
