//! Faction eligibility filter
//!
//! A record is eligible iff its trait codes contain the code of the
//! occupying faction. No faction means nothing is eligible.

use crate::catalog::item::Item;
use crate::catalog::loader::CatalogSource;
use crate::core::types::Faction;

/// Items from `source` viable against `faction`, in catalog order
pub fn filter_eligible(source: &CatalogSource, faction: Option<Faction>) -> Vec<Item> {
    let Some(faction) = faction else {
        return Vec::new();
    };
    let code = faction.compatibility_trait().code();

    source
        .iter()
        .filter(|(_, record)| record.has_trait_code(code))
        .map(|(key, record)| record.to_item(key))
        .collect()
}
