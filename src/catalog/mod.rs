//! Equipment catalogs
//!
//! Raw records are loaded once per process from static JSON files
//! (`CatalogStore`), then narrowed to the items viable against the occupying
//! faction (`filter_eligible`) before every loadout request.

pub mod filter;
pub mod item;
pub mod loader;

pub use filter::filter_eligible;
pub use item::{Category, Item};
pub use loader::{Catalog, CatalogSource, CatalogStore, RawRecord};
