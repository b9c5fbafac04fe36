//! Load raw catalog records from JSON files
//!
//! Catalog files are JSON objects keyed by item id. Weapon records carry a
//! `name`; stratagem records do not and are named by their key. Record order
//! in the file is preserved.

use serde::Deserialize;
use std::path::Path;

use crate::catalog::filter::filter_eligible;
use crate::catalog::item::{Category, Item};
use crate::core::config::CatalogConfig;
use crate::core::error::{LoadoutError, Result};
use crate::core::types::{Faction, FireMode, Trait, WeaponType};

/// A catalog record as it appears on disk
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub traits: Vec<u8>,
    #[serde(default)]
    pub fire_mode: Vec<u8>,
    #[serde(default, rename = "type")]
    pub weapon_type: Option<u8>,
}

impl RawRecord {
    pub fn has_trait_code(&self, code: u8) -> bool {
        self.traits.contains(&code)
    }

    /// Map integer codes into typed values. Unnamed records take `key` as name.
    pub fn to_item(&self, key: &str) -> Item {
        let name = self.name.clone().unwrap_or_else(|| key.to_string());
        let mut item = Item::new(name, self.traits.iter().map(|&c| Trait::from_code(c)))
            .with_fire_modes(self.fire_mode.iter().map(|&c| FireMode::from_code(c)));
        if let Some(code) = self.weapon_type {
            item = item.with_weapon_type(WeaponType::from_code(code));
        }
        item
    }
}

/// One category's records in file order
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    entries: Vec<(String, RawRecord)>,
}

impl CatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, record: RawRecord) {
        self.entries.push((key.into(), record));
    }

    /// Parse a catalog from a JSON string
    pub fn parse_json(content: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        let mut source = Self::new();
        for (key, value) in map {
            let record: RawRecord = serde_json::from_value(value)
                .map_err(|e| LoadoutError::CatalogLoad(format!("record '{}': {}", key, e)))?;
            source.push(key, record);
        }
        Ok(source)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoadoutError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        Self::parse_json(&content).map_err(|e| match e {
            LoadoutError::SerdeError(e) => {
                LoadoutError::CatalogLoad(format!("{}: {}", path.display(), e))
            }
            other => other,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Faction-filtered items for every category
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub primary: Vec<Item>,
    pub secondary: Vec<Item>,
    pub grenade: Vec<Item>,
    pub support: Vec<Item>,
}

impl Catalog {
    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Primary => &self.primary,
            Category::Secondary => &self.secondary,
            Category::Grenade => &self.grenade,
            Category::Support => &self.support,
        }
    }

    /// First category with nothing to draw from
    pub fn first_empty(&self) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| self.items(*c).is_empty())
    }
}

/// All four raw catalogs, loaded once and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    primary: CatalogSource,
    secondary: CatalogSource,
    grenade: CatalogSource,
    support: CatalogSource,
}

impl CatalogStore {
    pub fn from_sources(
        primary: CatalogSource,
        secondary: CatalogSource,
        grenade: CatalogSource,
        support: CatalogSource,
    ) -> Self {
        Self {
            primary,
            secondary,
            grenade,
            support,
        }
    }

    /// Load every category from the configured directory
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let load = |file: &str| CatalogSource::load_file(&config.dir.join(file));
        let store = Self::from_sources(
            load(&config.primary_file)?,
            load(&config.secondary_file)?,
            load(&config.grenade_file)?,
            load(&config.support_file)?,
        );
        tracing::info!(
            primary = store.primary.len(),
            secondary = store.secondary.len(),
            grenade = store.grenade.len(),
            support = store.support.len(),
            "Loaded catalogs from {:?}",
            config.dir
        );
        Ok(store)
    }

    pub fn source(&self, category: Category) -> &CatalogSource {
        match category {
            Category::Primary => &self.primary,
            Category::Secondary => &self.secondary,
            Category::Grenade => &self.grenade,
            Category::Support => &self.support,
        }
    }

    /// Items viable against `faction` in every category
    pub fn eligible(&self, faction: Option<Faction>) -> Catalog {
        Catalog {
            primary: filter_eligible(&self.primary, faction),
            secondary: filter_eligible(&self.secondary, faction),
            grenade: filter_eligible(&self.grenade, faction),
            support: filter_eligible(&self.support, faction),
        }
    }
}
