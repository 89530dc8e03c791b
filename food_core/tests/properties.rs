//! Property tests for the capped-bonus derivations

use food_core::prelude::*;
use gear_core::JobCategory;
use proptest::prelude::*;
use std::collections::HashMap;

struct FixedBuild {
    stats: StatMap,
}

impl AggregateStats for FixedBuild {
    fn stats_without_food(&self) -> StatMap {
        self.stats.clone()
    }

    fn equipped(&self, _slot: Slot) -> Option<GearId> {
        None
    }
}

fn with_other(other: u32) -> FixedBuild {
    FixedBuild {
        stats: HashMap::from([(Stat::Strength, other)]),
    }
}

fn strength_food(bonus: u32, rate: Option<u32>) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(GearDefinition {
        id: GearId(1),
        name: "Property Meal".to_string(),
        level: 1,
        slot: Slot::Food,
        job_category: JobCategory::All,
        patch: Patch::new(6, 0),
        stats: HashMap::from([(Stat::Strength, bonus)]),
        stat_rates: rate
            .map(|r| HashMap::from([(Stat::Strength, r)]))
            .unwrap_or_default(),
        stat_main: Stat::Strength,
    });
    catalog
}

proptest! {
    #[test]
    fn required_matches_ceiling_division(bonus in 0u32..10_000, rate in 1u32..300) {
        let catalog = strength_food(bonus, Some(rate));
        let food = FoodItem::new(GearId(1));

        let required = food.required_stats(&catalog).unwrap();
        let expected = (u64::from(bonus) * 100).div_ceil(u64::from(rate)) as u32;
        prop_assert_eq!(required[&Stat::Strength], expected);
    }

    #[test]
    fn effective_is_min_of_bonus_and_cap(
        bonus in 0u32..10_000,
        rate in 1u32..300,
        other in 0u32..100_000,
    ) {
        let catalog = strength_food(bonus, Some(rate));
        let food = FoodItem::new(GearId(1));

        let effective = food.effective_stats(&catalog, &with_other(other)).unwrap();
        let cap = (u64::from(other) * u64::from(rate) / 100) as u32;
        prop_assert_eq!(effective[&Stat::Strength], bonus.min(cap));
    }

    #[test]
    fn effective_without_rate_is_nominal(bonus in 0u32..10_000, other in 0u32..100_000) {
        let catalog = strength_food(bonus, None);
        let food = FoodItem::new(GearId(1));

        let effective = food.effective_stats(&catalog, &with_other(other)).unwrap();
        prop_assert_eq!(effective[&Stat::Strength], bonus);
    }

    #[test]
    fn utilization_is_monotonic_in_other_stats(
        bonus in 1u32..10_000,
        rate in 1u32..300,
        other in 0u32..50_000,
        delta in 0u32..50_000,
    ) {
        let catalog = strength_food(bonus, Some(rate));
        let food = FoodItem::new(GearId(1));

        let lower = food.utilization(&catalog, &with_other(other)).unwrap().unwrap();
        let higher = food
            .utilization(&catalog, &with_other(other + delta))
            .unwrap()
            .unwrap();
        prop_assert!(lower <= higher);
        prop_assert!(higher <= 100);
    }

    #[test]
    fn utilization_is_full_once_requirement_met(bonus in 1u32..10_000, rate in 1u32..300) {
        let catalog = strength_food(bonus, Some(rate));
        let food = FoodItem::new(GearId(1));

        let required = food.required_stats(&catalog).unwrap()[&Stat::Strength];
        let utilization = food
            .utilization(&catalog, &with_other(required))
            .unwrap()
            .unwrap();
        prop_assert_eq!(utilization, 100);
    }

    #[test]
    fn opacity_is_bounded_and_monotonic(
        bonus in 1u32..10_000,
        rate in 1u32..300,
        other in 0u32..50_000,
        delta in 0u32..50_000,
    ) {
        let catalog = strength_food(bonus, Some(rate));
        let food = FoodItem::new(GearId(1));

        let lower = food
            .utilization_opacity(&catalog, &with_other(other))
            .unwrap();
        let higher = food
            .utilization_opacity(&catalog, &with_other(other + delta))
            .unwrap();
        prop_assert!((0.2..=1.0).contains(&lower));
        prop_assert!((0.2..=1.0).contains(&higher));
        prop_assert!(lower <= higher);
    }
}
