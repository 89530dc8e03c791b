use crate::patch::Patch;
use crate::types::{JobCategory, Slot, Stat, StatMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, stable numeric identifier of a catalog entry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GearId(pub u32);

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable static definition of a piece of gear
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearDefinition {
    /// Unique identifier
    pub id: GearId,
    /// Display name
    pub name: String,
    /// Item level
    pub level: u32,
    /// Equipment slot this definition occupies
    pub slot: Slot,
    /// Jobs this definition applies to
    pub job_category: JobCategory,
    /// Patch in which this definition was released
    pub patch: Patch,
    /// Raw stat bonuses granted
    #[serde(default)]
    pub stats: StatMap,
    /// Percentage cap per stat, relative to the character's other
    /// equipped stats; absent = uncapped
    #[serde(default)]
    pub stat_rates: StatMap,
    /// The primary, highlighted stat
    pub stat_main: Stat,
}

impl GearDefinition {
    /// Whether this definition occupies the reserved food slot
    pub fn is_food(&self) -> bool {
        self.slot.is_food()
    }
}
