//! Loadout composition
//!
//! A loadout is seven items in a fixed order: primary, secondary, grenade and
//! four stratagems. The composer draws them at random from the faction's
//! eligible catalog while honoring the hazard and redundancy rules in
//! [`rules`].

pub mod composer;
pub mod rules;

pub use composer::{attempt_generation, LoadoutComposer};

use serde::Serialize;
use std::fmt;

use crate::catalog::{Category, Item};

/// Number of stratagem slots in a loadout
pub const SUPPORT_SLOTS: u8 = 4;

/// Position of an item within a loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Primary,
    Secondary,
    Grenade,
    /// Stratagem slot, numbered 1 to 4
    Support(u8),
}

impl Slot {
    pub fn category(&self) -> Category {
        match self {
            Self::Primary => Category::Primary,
            Self::Secondary => Category::Secondary,
            Self::Grenade => Category::Grenade,
            Self::Support(_) => Category::Support,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("Primary"),
            Self::Secondary => f.write_str("Secondary"),
            Self::Grenade => f.write_str("Grenade"),
            Self::Support(n) => write!(f, "Stratagem {}", n),
        }
    }
}

/// A complete, accepted set of equipment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loadout {
    pub primary: Item,
    pub secondary: Item,
    pub grenade: Item,
    pub support: [Item; SUPPORT_SLOTS as usize],
}

impl Loadout {
    /// Total number of items
    pub const SIZE: usize = 3 + SUPPORT_SLOTS as usize;

    pub fn new(
        primary: Item,
        secondary: Item,
        grenade: Item,
        support: [Item; SUPPORT_SLOTS as usize],
    ) -> Self {
        Self {
            primary,
            secondary,
            grenade,
            support,
        }
    }

    /// Items paired with their slot, in loadout order
    pub fn slots(&self) -> impl Iterator<Item = (Slot, &Item)> {
        [
            (Slot::Primary, &self.primary),
            (Slot::Secondary, &self.secondary),
            (Slot::Grenade, &self.grenade),
        ]
        .into_iter()
        .chain(
            self.support
                .iter()
                .enumerate()
                .map(|(i, item)| (Slot::Support(i as u8 + 1), item)),
        )
    }

    /// Items in loadout order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots().map(|(_, item)| item)
    }

    /// At least one item can take out structures and heavy armor
    pub fn has_explosive(&self) -> bool {
        self.items().any(Item::is_explosive)
    }
}
