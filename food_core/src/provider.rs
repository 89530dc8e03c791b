//! Aggregate view of the rest of the build
//!
//! The food derivations never discover their surrounding build; the host
//! passes this view in explicitly.

use gear_core::{GearId, Slot, StatMap};

/// Read-only totals over every equipped item other than food
pub trait AggregateStats {
    /// Total stats contributed by all equipped gear excluding the food slot
    fn stats_without_food(&self) -> StatMap;

    /// Identifier equipped in a slot, if any
    fn equipped(&self, slot: Slot) -> Option<GearId>;

    /// Identifier of the currently equipped food
    fn equipped_food(&self) -> Option<GearId> {
        self.equipped(Slot::Food)
    }
}
