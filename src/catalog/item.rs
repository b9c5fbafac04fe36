//! Equipment items and the categories they are drawn from

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{FireMode, Trait, WeaponType};

/// Catalog category an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Primary,
    Secondary,
    Grenade,
    /// Stratagems, the callable battlefield assets
    Support,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Primary, Self::Secondary, Self::Grenade, Self::Support];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Grenade => "grenade",
            Self::Support => "stratagem",
        };
        f.write_str(name)
    }
}

/// A single piece of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub traits: AHashSet<Trait>,
    /// Empty for grenades and stratagems
    pub fire_modes: AHashSet<FireMode>,
    pub weapon_type: Option<WeaponType>,
}

impl Item {
    pub fn new(name: impl Into<String>, traits: impl IntoIterator<Item = Trait>) -> Self {
        Self {
            name: name.into(),
            traits: traits.into_iter().collect(),
            fire_modes: AHashSet::new(),
            weapon_type: None,
        }
    }

    pub fn with_fire_modes(mut self, modes: impl IntoIterator<Item = FireMode>) -> Self {
        self.fire_modes = modes.into_iter().collect();
        self
    }

    pub fn with_weapon_type(mut self, weapon_type: WeaponType) -> Self {
        self.weapon_type = Some(weapon_type);
        self
    }

    pub fn has_trait(&self, t: Trait) -> bool {
        self.traits.contains(&t)
    }

    pub fn is_heat_sensitive(&self) -> bool {
        self.has_trait(Trait::HeatSensitive)
    }

    pub fn is_explosive(&self) -> bool {
        self.has_trait(Trait::Explosive)
    }

    pub fn has_fire_mode(&self, mode: FireMode) -> bool {
        self.fire_modes.contains(&mode)
    }

    pub fn is_shotgun(&self) -> bool {
        self.weapon_type == Some(WeaponType::Shotgun)
    }

    /// Shares a backpack or support weapon slot with `other`
    pub fn shares_unique_slot(&self, other: &Item) -> bool {
        self.traits
            .iter()
            .any(|t| t.is_unique_slot() && other.traits.contains(t))
    }
}
