//! Resolve a planet name into the faction and hazards that drive selection

use std::future::Future;

use crate::core::error::{LoadoutError, Result};
use crate::core::types::{Faction, Hazard, HazardSet};
use crate::warstatus::{Campaign, PlanetTable};

/// Anything that can supply the two war status documents
pub trait WarStatusSource {
    fn campaigns(&self) -> impl Future<Output = Result<Vec<Campaign>>>;
    fn planets(&self) -> impl Future<Output = Result<PlanetTable>>;
}

/// Faction and hazards for one planet
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    /// Planet name as reported by the service
    pub location: String,
    pub faction: Faction,
    pub hazards: HazardSet,
}

/// Looks up planets against a [`WarStatusSource`]
pub struct WorldStateResolver<S> {
    source: S,
}

impl<S: WarStatusSource> WorldStateResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve `location` (case-insensitive) to its world state.
    ///
    /// # Errors
    /// * `ResolverUnavailable` - the campaign list could not be read
    /// * `LocationNotFound` - no active campaign on a planet with that name
    /// * `NoHostileFaction` - the planet is not held by a hostile faction
    ///
    /// A failure to read the planet table only costs the hazard information;
    /// the loadout is still generated, just without hazard rules.
    pub async fn resolve(&self, location: &str) -> Result<WorldState> {
        let campaigns = self.source.campaigns().await?;

        let campaign = find_campaign(&campaigns, location)
            .ok_or_else(|| LoadoutError::LocationNotFound(location.to_string()))?;

        let faction = campaign
            .faction
            .as_deref()
            .and_then(Faction::from_api_name)
            .ok_or_else(|| LoadoutError::NoHostileFaction(campaign.name.clone()))?;

        let hazards = match campaign.planet_index {
            Some(index) => match self.source.planets().await {
                Ok(planets) => hazards_for(&planets, index),
                Err(e) => {
                    tracing::warn!("Planet table unavailable, ignoring hazards: {}", e);
                    HazardSet::new()
                }
            },
            None => HazardSet::new(),
        };

        tracing::info!(
            planet = %campaign.name,
            %faction,
            hazards = ?hazards.iter().collect::<Vec<_>>(),
            "Resolved world state"
        );

        Ok(WorldState {
            location: campaign.name.clone(),
            faction,
            hazards,
        })
    }
}

/// Active campaign on the planet called `name`, ignoring case
pub fn find_campaign<'a>(campaigns: &'a [Campaign], name: &str) -> Option<&'a Campaign> {
    let wanted = name.trim().to_lowercase();
    campaigns.iter().find(|c| c.name.to_lowercase() == wanted)
}

/// Temperature hazards on the planet at `index`
pub fn hazards_for(planets: &PlanetTable, index: u32) -> HazardSet {
    let Some(planet) = planets.get(&index.to_string()) else {
        tracing::debug!(index, "Planet not in planet table");
        return HazardSet::new();
    };

    planet
        .environmentals
        .iter()
        .filter_map(|env| {
            let hazard = Hazard::from_environmental(&env.name);
            if hazard.is_none() {
                tracing::debug!(condition = %env.name, "Irrelevant environmental condition");
            }
            hazard
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warstatus::{Environmental, Planet, SnapshotSource};

    fn campaign(name: &str, faction: &str, index: u32) -> Campaign {
        Campaign {
            name: name.into(),
            faction: Some(faction.into()),
            planet_index: Some(index),
        }
    }

    fn planet(name: &str, conditions: &[&str]) -> Planet {
        Planet {
            name: Some(name.into()),
            environmentals: conditions
                .iter()
                .map(|c| Environmental {
                    name: c.to_string(),
                    description: String::new(),
                })
                .collect(),
        }
    }

    fn source() -> SnapshotSource {
        let campaigns = vec![
            campaign("Shelt", "Terminids", 126),
            campaign("Bore Rock", "Automatons", 163),
            campaign("Vernen Wells", "Terminids", 180),
            campaign("Super Earth", "Humans", 0),
        ];
        let mut planets = PlanetTable::new();
        planets.insert("126".into(), planet("Shelt", &[]));
        planets.insert("163".into(), planet("Bore Rock", &["Intense Heat", "Tremors"]));
        planets.insert("180".into(), planet("Vernen Wells", &["Extreme Cold"]));
        SnapshotSource::new(campaigns, planets)
    }

    struct NoPlanets(SnapshotSource);

    impl WarStatusSource for NoPlanets {
        async fn campaigns(&self) -> Result<Vec<Campaign>> {
            self.0.campaigns().await
        }

        async fn planets(&self) -> Result<PlanetTable> {
            Err(LoadoutError::ResolverUnavailable("status 503".into()))
        }
    }

    #[tokio::test]
    async fn test_resolve_without_hazards() {
        let state = WorldStateResolver::new(source()).resolve("shelt").await.unwrap();
        assert_eq!(state.location, "Shelt");
        assert_eq!(state.faction, Faction::Terminids);
        assert!(state.hazards.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_keeps_only_temperature_hazards() {
        let state = WorldStateResolver::new(source()).resolve("Bore Rock").await.unwrap();
        assert_eq!(state.faction, Faction::Automatons);
        assert_eq!(state.hazards, HazardSet::of(Hazard::IntenseHeat));

        let state = WorldStateResolver::new(source()).resolve("VERNEN WELLS").await.unwrap();
        assert_eq!(state.hazards.sole(), Some(Hazard::ExtremeCold));
    }

    #[tokio::test]
    async fn test_unknown_planet_is_not_found() {
        let result = WorldStateResolver::new(source()).resolve("Nowhereland").await;
        assert!(matches!(result, Err(LoadoutError::LocationNotFound(name)) if name == "Nowhereland"));
    }

    #[tokio::test]
    async fn test_non_hostile_planet() {
        let result = WorldStateResolver::new(source()).resolve("Super Earth").await;
        assert!(matches!(result, Err(LoadoutError::NoHostileFaction(_))));
    }

    #[tokio::test]
    async fn test_planet_table_failure_drops_hazards() {
        let state = WorldStateResolver::new(NoPlanets(source()))
            .resolve("Bore Rock")
            .await
            .unwrap();
        assert_eq!(state.faction, Faction::Automatons);
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_hazards_for_missing_planet() {
        assert!(hazards_for(&PlanetTable::new(), 42).is_empty());
    }
}
