//! Food items - capped bonus stats and derived metrics
//!
//! Food bonuses are subject to diminishing returns: each stat's bonus only
//! applies up to `rate` percent of the character's other equipped stats.
//!
//! Formula:
//! - effective = min(bonus, floor(other_stat * rate / 100))
//! - required = ceil(bonus * 100 / rate)
//! - utilization = floor(sum(effective) / sum(bonus) * 100)
//!
//! The floor on the cap side and the ceiling on the requirement side match
//! the game's truncation rules and must not be changed. Every derivation is
//! recomputed from the catalog and the aggregate view at call time; a
//! `FoodItem` stores nothing but its identifier.

use crate::provider::AggregateStats;
use catalog_core::{Catalog, LookupError};
use gear_core::{GearColor, GearDefinition, GearId, Job, Patch, Slot, Stat, StatMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A food item assigned to the build's food slot
///
/// Identity is the catalog identifier; the identifier must resolve to a
/// food definition for any derivation to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodItem {
    id: GearId,
}

impl FoodItem {
    pub fn new(id: GearId) -> Self {
        FoodItem { id }
    }

    pub fn id(&self) -> GearId {
        self.id
    }

    /// Resolve this item's definition from the catalog
    pub fn data<'a>(&self, catalog: &'a Catalog) -> Result<&'a GearDefinition, LookupError> {
        catalog.food(self.id)
    }

    pub fn name<'a>(&self, catalog: &'a Catalog) -> Result<&'a str, LookupError> {
        Ok(&self.data(catalog)?.name)
    }

    pub fn level(&self, catalog: &Catalog) -> Result<u32, LookupError> {
        Ok(self.data(catalog)?.level)
    }

    pub fn slot(&self, catalog: &Catalog) -> Result<Slot, LookupError> {
        Ok(self.data(catalog)?.slot)
    }

    /// Jobs this food applies to
    pub fn jobs(&self, catalog: &Catalog) -> Result<&'static [Job], LookupError> {
        Ok(self.data(catalog)?.job_category.jobs())
    }

    pub fn patch(&self, catalog: &Catalog) -> Result<Patch, LookupError> {
        Ok(self.data(catalog)?.patch)
    }

    /// Food is always consumed high-quality
    pub fn hq(&self) -> bool {
        true
    }

    pub fn color(&self) -> GearColor {
        GearColor::White
    }

    /// Raw bonus stats granted by this item
    pub fn stats<'a>(&self, catalog: &'a Catalog) -> Result<&'a StatMap, LookupError> {
        Ok(&self.data(catalog)?.stats)
    }

    /// Percentage cap per stat
    pub fn stat_rates<'a>(&self, catalog: &'a Catalog) -> Result<&'a StatMap, LookupError> {
        Ok(&self.data(catalog)?.stat_rates)
    }

    /// Minimum other-equipment stats needed to realize the full bonus
    ///
    /// `ceil(bonus * 100 / rate)` per stat; any fractional shortfall means
    /// the cap still binds, hence the ceiling. Stats without a rate are
    /// uncapped and carry no requirement.
    pub fn required_stats(&self, catalog: &Catalog) -> Result<StatMap, LookupError> {
        let data = self.data(catalog)?;

        let mut required = StatMap::new();
        for (stat, bonus) in &data.stats {
            if let Some(rate) = data.stat_rates.get(stat) {
                let needed = (u64::from(*bonus) * 100).div_ceil(u64::from(*rate));
                required.insert(*stat, needed as u32);
            }
        }
        Ok(required)
    }

    /// The bonus actually granted once each stat's cap is applied
    ///
    /// `min(bonus, floor(other_stat * rate / 100))` per stat. `other_stat`
    /// defaults to 1 when the aggregate view has no value for the stat; a
    /// stat without a rate is uncapped and passes through unchanged.
    pub fn effective_stats(
        &self,
        catalog: &Catalog,
        aggregate: &impl AggregateStats,
    ) -> Result<StatMap, LookupError> {
        let data = self.data(catalog)?;
        let without_food = aggregate.stats_without_food();

        let mut effective = StatMap::new();
        for (stat, bonus) in &data.stats {
            let value = match data.stat_rates.get(stat) {
                Some(rate) => {
                    let other = without_food.get(stat).copied().unwrap_or(1);
                    let cap = u64::from(other) * u64::from(*rate) / 100;
                    cap.min(u64::from(*bonus)) as u32
                }
                None => *bonus,
            };
            effective.insert(*stat, value);
        }
        Ok(effective)
    }

    /// Flag map marking only the primary stat
    pub fn stat_highlights(
        &self,
        catalog: &Catalog,
    ) -> Result<HashMap<Stat, bool>, LookupError> {
        let data = self.data(catalog)?;
        Ok(HashMap::from([(data.stat_main, true)]))
    }

    /// Percentage of the total potential bonus actually realized
    ///
    /// `floor(sum(effective) / sum(bonus) * 100)` across all stats
    /// combined, not per stat. `None` when the definition grants no stats
    /// at all, since no percentage of an empty bonus is defined.
    pub fn utilization(
        &self,
        catalog: &Catalog,
        aggregate: &impl AggregateStats,
    ) -> Result<Option<u32>, LookupError> {
        let full: u64 = self.stats(catalog)?.values().map(|v| u64::from(*v)).sum();
        if full == 0 {
            return Ok(None);
        }

        let effective: u64 = self
            .effective_stats(catalog, aggregate)?
            .values()
            .map(|v| u64::from(*v))
            .sum();
        Ok(Some((effective * 100 / full) as u32))
    }

    /// Display weighting for utilization: `max(0.2, (utilization / 100)^2)`
    ///
    /// Never fully transparent, and superlinear so high utilization stands
    /// out. An undefined utilization weighs as zero.
    pub fn utilization_opacity(
        &self,
        catalog: &Catalog,
        aggregate: &impl AggregateStats,
    ) -> Result<f64, LookupError> {
        let utilization = self.utilization(catalog, aggregate)?.unwrap_or(0);
        Ok((f64::from(utilization) / 100.0).powi(2).max(0.2))
    }

    /// Whether this item's content is released at the given game version
    pub fn is_installed(
        &self,
        catalog: &Catalog,
        released: Patch,
    ) -> Result<bool, LookupError> {
        Ok(!(self.data(catalog)?.patch > released))
    }

    /// Whether the aggregate view has this exact item in the food slot
    pub fn is_equipped(&self, aggregate: &impl AggregateStats) -> bool {
        aggregate.equipped_food() == Some(self.id)
    }
}
