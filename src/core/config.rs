//! Application configuration with documented defaults
//!
//! Loaded from `data/config.toml` when present. Every field has a default so
//! a partial file (or no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{LoadoutError, Result};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "data/config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub war_status: WarStatusConfig,
    pub catalog: CatalogConfig,
    pub selection: SelectionConfig,
    pub presentation: PresentationConfig,
}

/// Where faction and hazard information comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WarStatusConfig {
    /// Base URL of the war status API (no trailing slash)
    pub base_url: String,

    /// Per-request timeout in seconds. 0 disables the timeout.
    pub timeout_secs: u64,

    /// Read `campaign.json` and `planets.json` from this directory instead
    /// of calling the API
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for WarStatusConfig {
    fn default() -> Self {
        Self {
            base_url: "https://helldiverstrainingmanual.com/api/v1".into(),
            timeout_secs: 10,
            snapshot_dir: None,
        }
    }
}

/// Catalog file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub dir: PathBuf,
    pub primary_file: String,
    pub secondary_file: String,
    pub grenade_file: String,
    pub support_file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data/catalog"),
            primary_file: "primary.json".into(),
            secondary_file: "secondary.json".into(),
            grenade_file: "grenades.json".into(),
            support_file: "stratagems.json".into(),
        }
    }
}

/// Ceilings for the selection retry loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Maximum random draws spent on a single slot
    ///
    /// Each rejected candidate (heat, conflict or the cold-weather redraw)
    /// costs one draw. Catalogs hold a few dozen items at most, so 256 draws
    /// only run out when a slot genuinely has no acceptable candidate.
    pub max_slot_draws: u32,

    /// Maximum complete loadouts generated while looking for one with an
    /// explosive item
    pub max_generation_attempts: u32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_slot_draws: 256,
            max_generation_attempts: 64,
        }
    }
}

/// Presentation assets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Thumbnails for primaries, secondaries and grenades
    pub weapons_dir: PathBuf,
    /// Thumbnails for stratagems
    pub stratagems_dir: PathBuf,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            weapons_dir: PathBuf::from("resources/weapons"),
            stratagems_dir: PathBuf::from("resources/stratagems"),
        }
    }
}

impl AppConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| LoadoutError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate().map_err(LoadoutError::Config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoadoutError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.selection.max_slot_draws == 0 {
            return Err("selection.max_slot_draws must be at least 1".into());
        }

        if self.selection.max_generation_attempts == 0 {
            return Err("selection.max_generation_attempts must be at least 1".into());
        }

        if self.war_status.snapshot_dir.is_none() && self.war_status.base_url.trim().is_empty() {
            return Err("war_status.base_url is empty and no snapshot_dir is set".into());
        }

        Ok(())
    }
}
