//! Core type definitions used throughout the codebase
//!
//! Catalog files and the war status service speak in bare integer codes and
//! free-form strings. Everything is mapped into the closed types below at the
//! loading boundary so the selection rules can read as named predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hostile force occupying a planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Terminids,
    Automatons,
    Illuminates,
}

impl Faction {
    pub const ALL: [Faction; 3] = [Self::Terminids, Self::Automatons, Self::Illuminates];

    /// Trait that marks an item as viable against this faction
    pub fn compatibility_trait(&self) -> Trait {
        match self {
            Self::Terminids => Trait::Terminids,
            Self::Automatons => Trait::Automatons,
            Self::Illuminates => Trait::Illuminates,
        }
    }

    /// Parse the faction name reported by the war status service.
    ///
    /// Returns None for "none", "Humans" and anything else that is not a
    /// hostile faction.
    pub fn from_api_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "terminids" | "terminid" => Some(Self::Terminids),
            "automatons" | "automaton" => Some(Self::Automatons),
            "illuminates" | "illuminate" => Some(Self::Illuminates),
            _ => None,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terminids => "Terminids",
            Self::Automatons => "Automatons",
            Self::Illuminates => "Illuminates",
        };
        f.write_str(name)
    }
}

/// Behavioral tag carried by an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trait {
    /// Overheats or loses effectiveness in hot climates (9)
    HeatSensitive,
    /// Viable against Terminids (13)
    Terminids,
    /// Viable against Automatons (14)
    Automatons,
    /// Viable against Illuminates (15)
    Illuminates,
    /// Occupies the backpack slot (16)
    Backpack,
    /// Occupies the support weapon slot (17)
    SupportWeapon,
    /// Can destroy structures and heavy armor (18)
    Explosive,
    /// Any code without a rule attached to it
    Other(u8),
}

impl Trait {
    pub fn from_code(code: u8) -> Self {
        match code {
            9 => Self::HeatSensitive,
            13 => Self::Terminids,
            14 => Self::Automatons,
            15 => Self::Illuminates,
            16 => Self::Backpack,
            17 => Self::SupportWeapon,
            18 => Self::Explosive,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::HeatSensitive => 9,
            Self::Terminids => 13,
            Self::Automatons => 14,
            Self::Illuminates => 15,
            Self::Backpack => 16,
            Self::SupportWeapon => 17,
            Self::Explosive => 18,
            Self::Other(code) => *code,
        }
    }

    /// Traits of which a loadout may hold at most one support item
    pub fn is_unique_slot(&self) -> bool {
        matches!(self, Self::Backpack | Self::SupportWeapon)
    }
}

/// Weapon fire mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FireMode {
    /// Burst of pellets fired by shotgun-class sidearms (5)
    Spread,
    Other(u8),
}

impl FireMode {
    pub fn from_code(code: u8) -> Self {
        match code {
            5 => Self::Spread,
            other => Self::Other(other),
        }
    }
}

/// Weapon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    /// Shotgun (2)
    Shotgun,
    Other(u8),
}

impl WeaponType {
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Shotgun,
            other => Self::Other(other),
        }
    }
}

/// Environmental condition that changes which gear makes sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hazard {
    ExtremeCold,
    IntenseHeat,
}

impl Hazard {
    /// Map an environmental name from the war status service.
    /// Only the two temperature extremes matter for selection.
    pub fn from_environmental(name: &str) -> Option<Self> {
        match name {
            "Extreme Cold" => Some(Self::ExtremeCold),
            "Intense Heat" => Some(Self::IntenseHeat),
            _ => None,
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtremeCold => f.write_str("Extreme Cold"),
            Self::IntenseHeat => f.write_str("Intense Heat"),
        }
    }
}

/// Active temperature hazards on a planet
///
/// Selection rules only fire when exactly one hazard is active. A planet
/// reporting both extremes gets no hazard treatment at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardSet {
    cold: bool,
    heat: bool,
}

impl HazardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(hazard: Hazard) -> Self {
        let mut set = Self::new();
        set.insert(hazard);
        set
    }

    pub fn insert(&mut self, hazard: Hazard) {
        match hazard {
            Hazard::ExtremeCold => self.cold = true,
            Hazard::IntenseHeat => self.heat = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.cold && !self.heat
    }

    /// The hazard if it is the only one active
    pub fn sole(&self) -> Option<Hazard> {
        match (self.cold, self.heat) {
            (true, false) => Some(Hazard::ExtremeCold),
            (false, true) => Some(Hazard::IntenseHeat),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Hazard> {
        [(Hazard::ExtremeCold, self.cold), (Hazard::IntenseHeat, self.heat)]
            .into_iter()
            .filter_map(|(hazard, active)| active.then_some(hazard))
    }
}

impl FromIterator<Hazard> for HazardSet {
    fn from_iter<I: IntoIterator<Item = Hazard>>(iter: I) -> Self {
        let mut set = Self::new();
        for hazard in iter {
            set.insert(hazard);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_codes_round_trip() {
        for code in 0..=30u8 {
            assert_eq!(Trait::from_code(code).code(), code);
        }
        assert_eq!(Trait::from_code(9), Trait::HeatSensitive);
        assert_eq!(Trait::from_code(18), Trait::Explosive);
        assert_eq!(Trait::from_code(3), Trait::Other(3));
    }

    #[test]
    fn test_faction_trait_mapping() {
        assert_eq!(Faction::Terminids.compatibility_trait().code(), 13);
        assert_eq!(Faction::Automatons.compatibility_trait().code(), 14);
        assert_eq!(Faction::Illuminates.compatibility_trait().code(), 15);
    }

    #[test]
    fn test_faction_from_api_name() {
        assert_eq!(Faction::from_api_name("Terminids"), Some(Faction::Terminids));
        assert_eq!(Faction::from_api_name("automatons"), Some(Faction::Automatons));
        assert_eq!(Faction::from_api_name("Illuminate"), Some(Faction::Illuminates));
        assert_eq!(Faction::from_api_name("none"), None);
        assert_eq!(Faction::from_api_name("Humans"), None);
    }

    #[test]
    fn test_unique_slot_traits() {
        assert!(Trait::Backpack.is_unique_slot());
        assert!(Trait::SupportWeapon.is_unique_slot());
        assert!(!Trait::Explosive.is_unique_slot());
    }

    #[test]
    fn test_hazard_set_sole() {
        assert_eq!(HazardSet::new().sole(), None);
        assert_eq!(HazardSet::of(Hazard::IntenseHeat).sole(), Some(Hazard::IntenseHeat));
        assert_eq!(HazardSet::of(Hazard::ExtremeCold).sole(), Some(Hazard::ExtremeCold));

        let both: HazardSet = [Hazard::ExtremeCold, Hazard::IntenseHeat].into_iter().collect();
        assert_eq!(both.iter().count(), 2);
        assert_eq!(both.sole(), None);
    }

    #[test]
    fn test_hazard_from_environmental() {
        assert_eq!(Hazard::from_environmental("Intense Heat"), Some(Hazard::IntenseHeat));
        assert_eq!(Hazard::from_environmental("Extreme Cold"), Some(Hazard::ExtremeCold));
        assert_eq!(Hazard::from_environmental("Acid Storms"), None);
    }
}
