pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{LoadoutError, Result};
pub use types::{Faction, FireMode, Hazard, HazardSet, Trait, WeaponType};
