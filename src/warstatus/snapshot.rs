//! Offline war status read from JSON files
//!
//! A snapshot directory holds `campaign.json` and `planets.json` in the same
//! shape the API serves them.

use std::path::Path;

use crate::core::error::{LoadoutError, Result};
use crate::warstatus::resolver::WarStatusSource;
use crate::warstatus::{Campaign, PlanetTable};

pub const CAMPAIGN_FILE: &str = "campaign.json";
pub const PLANETS_FILE: &str = "planets.json";

/// War status held in memory
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    campaigns: Vec<Campaign>,
    planets: PlanetTable,
}

impl SnapshotSource {
    pub fn new(campaigns: Vec<Campaign>, planets: PlanetTable) -> Self {
        Self { campaigns, planets }
    }

    /// Load both documents from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|e| {
                LoadoutError::ResolverUnavailable(format!("{}: {}", path.display(), e))
            })
        };

        let campaigns: Vec<Campaign> = serde_json::from_str(&read(CAMPAIGN_FILE)?)?;
        let planets: PlanetTable = serde_json::from_str(&read(PLANETS_FILE)?)?;

        tracing::info!(
            campaigns = campaigns.len(),
            planets = planets.len(),
            "Loaded war status snapshot from {:?}",
            dir
        );
        Ok(Self::new(campaigns, planets))
    }
}

impl WarStatusSource for SnapshotSource {
    async fn campaigns(&self) -> Result<Vec<Campaign>> {
        Ok(self.campaigns.clone())
    }

    async fn planets(&self) -> Result<PlanetTable> {
        Ok(self.planets.clone())
    }
}
