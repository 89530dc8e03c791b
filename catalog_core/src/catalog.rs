use crate::config::{CatalogFileConfig, GearConfig};
use crate::{ConfigError, LookupError};
use gear_core::{GearDefinition, GearId, ParsePatchError, Patch};
use std::collections::HashMap;
use std::path::Path;

/// Read-only registry of gear definitions, loaded from TOML files
#[derive(Debug, Default)]
pub struct Catalog {
    gear: HashMap<GearId, GearDefinition>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all catalog files from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        catalog.load_dir(dir)?;
        Ok(catalog)
    }

    /// Load catalog files from a directory recursively
    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single catalog file
    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: CatalogFileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?;

        for entry in config.gear {
            let definition =
                definition_from_config(entry).map_err(|message| ConfigError::Validation {
                    message,
                    path: path.to_path_buf(),
                })?;

            if self.gear.contains_key(&definition.id) {
                return Err(ConfigError::Validation {
                    message: format!("duplicate gear id {}", definition.id),
                    path: path.to_path_buf(),
                });
            }
            self.gear.insert(definition.id, definition);
        }

        Ok(())
    }

    /// Insert a definition directly, replacing any previous entry with the
    /// same id
    pub fn insert(&mut self, definition: GearDefinition) {
        self.gear.insert(definition.id, definition);
    }

    /// Get a definition by id
    pub fn get(&self, id: GearId) -> Option<&GearDefinition> {
        self.gear.get(&id)
    }

    /// Check if a definition exists
    pub fn contains(&self, id: GearId) -> bool {
        self.gear.contains_key(&id)
    }

    /// List all gear ids
    pub fn gear_ids(&self) -> impl Iterator<Item = GearId> + '_ {
        self.gear.keys().copied()
    }

    /// Iterate over all food definitions
    pub fn foods(&self) -> impl Iterator<Item = &GearDefinition> {
        self.gear.values().filter(|def| def.is_food())
    }

    /// Resolve an id to a food definition
    ///
    /// Fails with `UnknownItem` when the id is absent and `NotFood` when it
    /// resolves to a definition outside the food slot.
    pub fn food(&self, id: GearId) -> Result<&GearDefinition, LookupError> {
        let definition = self.get(id).ok_or(LookupError::UnknownItem(id))?;
        if !definition.is_food() {
            return Err(LookupError::NotFood(id));
        }
        Ok(definition)
    }
}

/// Validate a raw config entry into a definition
fn definition_from_config(config: GearConfig) -> Result<GearDefinition, String> {
    let patch: Patch = config.patch.parse().map_err(|e: ParsePatchError| e.to_string())?;

    // A zero rate can never grant anything through the cap and would divide
    // by zero in the required-stat computation.
    if let Some((stat, _)) = config.stat_rates.iter().find(|(_, rate)| **rate == 0) {
        return Err(format!("zero stat rate for {}", stat));
    }

    Ok(GearDefinition {
        id: GearId(config.id),
        name: config.name,
        level: config.level,
        slot: config.slot,
        job_category: config.job_category,
        patch,
        stats: config.stats,
        stat_rates: config.stat_rates,
        stat_main: config.stat_main,
    })
}
