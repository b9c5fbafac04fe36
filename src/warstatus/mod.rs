//! Galactic war status
//!
//! Two read-only documents describe the front: the list of active campaigns
//! (planet name, occupying faction, planet index) and the planet table
//! (environmental conditions per planet index). They can come from the live
//! API ([`WarStatusClient`]) or from JSON files on disk ([`SnapshotSource`]).
//! [`WorldStateResolver`] turns them into the faction and hazards for one
//! planet.

pub mod client;
pub mod resolver;
pub mod snapshot;

pub use client::WarStatusClient;
pub use resolver::{WarStatusSource, WorldState, WorldStateResolver};
pub use snapshot::SnapshotSource;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An active campaign from `/war/campaign`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    /// "Terminids", "Automatons", "Illuminate", or a non-hostile value
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default, rename = "planetIndex")]
    pub planet_index: Option<u32>,
}

/// A planet from `/planets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Planet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub environmentals: Vec<Environmental>,
}

/// An environmental condition on a planet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environmental {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Planets keyed by their index as a string
pub type PlanetTable = HashMap<String, Planet>;
