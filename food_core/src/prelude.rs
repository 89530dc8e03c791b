//! Prelude module for convenient imports
//!
//! ```rust
//! use food_core::prelude::*;
//! ```

// Core types
pub use crate::food::FoodItem;
pub use crate::provider::AggregateStats;

// Re-exports from the catalog and gear crates
pub use catalog_core::{Catalog, ConfigError, LookupError};
pub use gear_core::{GearDefinition, GearId, Patch, Slot, Stat, StatMap};
