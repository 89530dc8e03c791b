use gear_core::{JobCategory, Slot, Stat};
use serde::Deserialize;
use std::collections::HashMap;

/// TOML configuration for a catalog file
#[derive(Debug, Deserialize)]
pub struct CatalogFileConfig {
    #[serde(default)]
    pub gear: Vec<GearConfig>,
}

/// Configuration for a single gear entry
#[derive(Debug, Deserialize)]
pub struct GearConfig {
    pub id: u32,
    pub name: String,
    pub level: u32,
    pub slot: Slot,
    pub job_category: JobCategory,
    // Patch as the dotted string form; parsed and validated on conversion
    pub patch: String,
    #[serde(default)]
    pub stats: HashMap<Stat, u32>,
    #[serde(default)]
    pub stat_rates: HashMap<Stat, u32>,
    pub stat_main: Stat,
}
