//! Render a finished loadout for the requesting player
//!
//! `compact` puts everything in one card; `detailed` (the default) gives
//! each item its own card with a thumbnail.

pub mod embed;

pub use embed::{Embed, EmbedField};

use std::path::{Path, PathBuf};

use crate::catalog::Category;
use crate::core::config::PresentationConfig;
use crate::core::types::Faction;
use crate::loadout::{Loadout, Slot};

/// How a loadout is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresentationMode {
    /// One summary card
    Compact,
    /// One card per item
    #[default]
    Detailed,
}

impl PresentationMode {
    /// Interpret the optional trailing flag of the loadout command.
    /// Unrecognized flags fall back to the detailed view.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().to_lowercase().as_str() {
            "short" | "compact" => Self::Compact,
            _ => Self::Detailed,
        }
    }
}

/// Everything the presenter needs besides the loadout itself
#[derive(Debug, Clone, Copy)]
pub struct Briefing<'a> {
    pub location: &'a str,
    pub faction: Faction,
    pub user: &'a str,
}

/// Turns loadouts into cards
#[derive(Debug, Clone)]
pub struct Presenter {
    weapons_dir: PathBuf,
    stratagems_dir: PathBuf,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(&PresentationConfig::default())
    }
}

impl Presenter {
    pub fn new(config: &PresentationConfig) -> Self {
        Self {
            weapons_dir: config.weapons_dir.clone(),
            stratagems_dir: config.stratagems_dir.clone(),
        }
    }

    pub fn render(&self, mode: PresentationMode, loadout: &Loadout, briefing: &Briefing) -> Vec<Embed> {
        match mode {
            PresentationMode::Compact => vec![self.compact(loadout, briefing)],
            PresentationMode::Detailed => self.detailed(loadout),
        }
    }

    fn compact(&self, loadout: &Loadout, briefing: &Briefing) -> Embed {
        let mut embed = Embed::new("Loadout").description(format!(
            "The finest selection of tools to destroy the {} on {}",
            briefing.faction, briefing.location
        ));
        for (slot, item) in loadout.slots() {
            let label = match slot {
                Slot::Support(_) => "Stratagem".to_string(),
                other => other.to_string(),
            };
            embed = embed.field(label, item.name.clone());
        }
        embed.footer(format!("Good luck out there, {}!", briefing.user))
    }

    fn detailed(&self, loadout: &Loadout) -> Vec<Embed> {
        loadout
            .slots()
            .map(|(slot, item)| {
                Embed::new(slot.to_string())
                    .field(item.name.clone(), "")
                    .thumbnail(self.thumbnail_path(slot.category(), &item.name))
            })
            .collect()
    }

    /// Thumbnail file for an item.
    ///
    /// Weapon art replaces spaces with dashes; stratagem art replaces spaces
    /// and slashes with underscores.
    pub fn thumbnail_path(&self, category: Category, name: &str) -> PathBuf {
        match category {
            Category::Support => asset(&self.stratagems_dir, &name.replace([' ', '/'], "_")),
            _ => asset(&self.weapons_dir, &name.replace(' ', "-")),
        }
    }
}

fn asset(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.png", stem))
}
