use thiserror::Error;

use crate::catalog::Category;
use crate::loadout::Slot;

#[derive(Error, Debug)]
pub enum LoadoutError {
    #[error("Planet '{0}' not found or planet not an active warzone")]
    LocationNotFound(String),

    #[error("War status service unavailable: {0}")]
    ResolverUnavailable(String),

    #[error("No hostile faction is occupying {0}")]
    NoHostileFaction(String),

    #[error("No {0} items are available against this faction")]
    CategoryExhausted(Category),

    #[error("Could not fill the {slot} slot after {draws} draws")]
    SlotUnsatisfiable { slot: Slot, draws: u32 },

    #[error("Could not assemble a loadout with explosive capability after {attempts} attempts")]
    SelectionUnsatisfiable { attempts: u32 },

    #[error("Catalog error: {0}")]
    CatalogLoad(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoadoutError>;
