//! food_core - Capped food-bonus computation for character builds
//!
//! A food item grants bonus stats, but each bonus is capped at a
//! percentage rate of the character's other equipped stats, so the bonus
//! actually granted depends on the rest of the build. This crate computes:
//!
//! - effective stats: the bonus after each stat's cap is applied
//! - required stats: the other-equipment values needed for the full bonus
//! - utilization: how much of the total potential bonus is realized
//! - install and equip state for a catalog entry
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use food_core::prelude::*;
//! use std::path::Path;
//!
//! // Load the gear catalog and point a food item at an entry
//! let catalog = Catalog::load(Path::new("catalog/"))?;
//! let food = FoodItem::new(GearId(33800));
//!
//! // `build` implements AggregateStats over the other equipped gear
//! let effective = food.effective_stats(&catalog, &build)?;
//! let utilization = food.utilization(&catalog, &build)?;
//! println!("realizing {:?}% of {}", utilization, food.name(&catalog)?);
//! ```

pub mod food;
pub mod prelude;
pub mod provider;

// Core API - what most users need
pub use food::FoodItem;
pub use provider::AggregateStats;

// Re-export commonly needed catalog and gear types
pub use catalog_core::{Catalog, LookupError};
pub use gear_core::{GearDefinition, GearId, Patch, Slot, Stat, StatMap};
