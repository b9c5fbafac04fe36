//! Constrained random loadout generation
//!
//! Slots are filled in order. Each slot draws uniformly from its eligible
//! pool and throws back candidates that break a rule in [`rules`]. A loadout
//! that dead-ends on a slot, or finishes without any explosive item, is
//! discarded wholesale and generated again from scratch.
//!
//! Every loop is bounded by [`SelectionConfig`]: a slot that cannot be filled
//! yields `SlotUnsatisfiable` for that attempt, and running out of generation
//! attempts yields `SelectionUnsatisfiable`.

use rand::Rng;

use crate::catalog::{Catalog, Category, Item};
use crate::core::config::SelectionConfig;
use crate::core::error::{LoadoutError, Result};
use crate::core::types::HazardSet;
use crate::loadout::rules;
use crate::loadout::{Loadout, Slot, SUPPORT_SLOTS};

/// Builds loadouts that satisfy every selection rule
#[derive(Debug, Clone, Default)]
pub struct LoadoutComposer {
    config: SelectionConfig,
}

impl LoadoutComposer {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Generate loadouts until one contains an explosive item.
    ///
    /// # Errors
    /// * `CategoryExhausted` - a category has no eligible items (checked before any draw)
    /// * `SelectionUnsatisfiable` - nothing in the catalog is explosive, or
    ///   every attempt dead-ended on a slot or came back without an explosive item
    pub fn compose(
        &self,
        catalog: &Catalog,
        hazards: HazardSet,
        rng: &mut impl Rng,
    ) -> Result<Loadout> {
        if let Some(category) = catalog.first_empty() {
            return Err(LoadoutError::CategoryExhausted(category));
        }

        let any_explosive = Category::ALL
            .into_iter()
            .any(|c| catalog.items(c).iter().any(Item::is_explosive));
        if !any_explosive {
            return Err(LoadoutError::SelectionUnsatisfiable { attempts: 0 });
        }

        for attempt in 1..=self.config.max_generation_attempts {
            match attempt_generation(catalog, hazards, &self.config, rng) {
                Ok(loadout) if loadout.has_explosive() => {
                    tracing::debug!(attempt, "Accepted loadout");
                    return Ok(loadout);
                }
                Ok(_) => tracing::debug!(attempt, "No explosive item, discarding loadout"),
                Err(LoadoutError::SlotUnsatisfiable { slot, draws }) => {
                    tracing::debug!(attempt, %slot, draws, "Slot dead-ended, discarding loadout");
                }
                Err(e) => return Err(e),
            }
        }

        Err(LoadoutError::SelectionUnsatisfiable {
            attempts: self.config.max_generation_attempts,
        })
    }
}

/// Fill all seven slots once.
///
/// The result satisfies every per-slot rule but may lack an explosive item;
/// [`LoadoutComposer::compose`] is responsible for that check.
pub fn attempt_generation(
    catalog: &Catalog,
    hazards: HazardSet,
    config: &SelectionConfig,
    rng: &mut impl Rng,
) -> Result<Loadout> {
    if let Some(category) = catalog.first_empty() {
        return Err(LoadoutError::CategoryExhausted(category));
    }
    let draws = config.max_slot_draws;

    let primary = draw_slot(Slot::Primary, &catalog.primary, hazards, draws, true, rng, |_| false)?;

    let secondary = draw_slot(Slot::Secondary, &catalog.secondary, hazards, draws, true, rng, |c| {
        rules::secondary_conflicts(c, primary)
    })?;

    // Grenades get no conflict checks and no cold bias
    let grenade = draw_slot(Slot::Grenade, &catalog.grenade, hazards, draws, false, rng, |_| false)?;

    let mut selected: Vec<&Item> = vec![primary, secondary, grenade];
    // Placeholders, every entry is drawn below
    let mut support: [&Item; SUPPORT_SLOTS as usize] = [grenade; SUPPORT_SLOTS as usize];
    for (n, pick) in (1..=SUPPORT_SLOTS).zip(support.iter_mut()) {
        *pick = draw_slot(Slot::Support(n), &catalog.support, hazards, draws, true, rng, |c| {
            rules::support_conflicts(c, &selected)
        })?;
        selected.push(*pick);
    }

    Ok(Loadout::new(
        primary.clone(),
        secondary.clone(),
        grenade.clone(),
        support.map(Item::clone),
    ))
}

/// Draw one item for `slot`.
///
/// A candidate is thrown back when it is heat-sensitive under intense heat or
/// when `conflicts` says so. With `cold_bias`, the first heat-tolerant
/// candidate drawn under extreme cold is also thrown back once, nudging the
/// slot toward heat-sensitive gear without forcing it.
fn draw_slot<'a>(
    slot: Slot,
    pool: &'a [Item],
    hazards: HazardSet,
    max_draws: u32,
    cold_bias: bool,
    rng: &mut impl Rng,
    conflicts: impl Fn(&Item) -> bool,
) -> Result<&'a Item> {
    if pool.is_empty() {
        return Err(LoadoutError::CategoryExhausted(slot.category()));
    }

    let mut cold_redraws = 0;
    for _ in 0..max_draws {
        let candidate = &pool[rng.gen_range(0..pool.len())];

        if rules::rejected_by_heat(candidate, hazards) || conflicts(candidate) {
            continue;
        }

        if cold_bias && cold_redraws == 0 && rules::wants_cold_redraw(candidate, hazards) {
            cold_redraws += 1;
            tracing::debug!(%slot, skipped = %candidate.name, "Cold planet, redrawing once");
            continue;
        }

        return Ok(candidate);
    }

    Err(LoadoutError::SlotUnsatisfiable {
        slot,
        draws: max_draws,
    })
}
