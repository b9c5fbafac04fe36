//! Acceptance rules for a drawn candidate
//!
//! Each predicate answers whether a candidate should be thrown back. They
//! carry no randomness so they can be checked directly against a finished
//! loadout as well.

use crate::catalog::Item;
use crate::core::types::{FireMode, Hazard, HazardSet};

/// Heat-sensitive gear is never taken onto a planet whose only hazard is
/// intense heat
pub fn rejected_by_heat(candidate: &Item, hazards: HazardSet) -> bool {
    candidate.is_heat_sensitive() && hazards.sole() == Some(Hazard::IntenseHeat)
}

/// On a planet whose only hazard is extreme cold, gear that is not
/// heat-sensitive earns one redraw per slot
pub fn wants_cold_redraw(candidate: &Item, hazards: HazardSet) -> bool {
    !candidate.is_heat_sensitive() && hazards.sole() == Some(Hazard::ExtremeCold)
}

/// A spread-fire sidearm next to a shotgun primary, or two explosive guns
pub fn secondary_conflicts(candidate: &Item, primary: &Item) -> bool {
    (candidate.has_fire_mode(FireMode::Spread) && primary.is_shotgun())
        || (candidate.is_explosive() && primary.is_explosive())
}

/// A second backpack, a second support weapon, or a repeat of anything
/// already selected
pub fn support_conflicts(candidate: &Item, selected: &[&Item]) -> bool {
    selected
        .iter()
        .any(|item| item.shares_unique_slot(candidate) || item.name == candidate.name)
}
