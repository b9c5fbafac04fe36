//! Democracy Loadout - hazard-aware loadout generator for the galactic war

pub mod catalog;
pub mod command;
pub mod core;
pub mod loadout;
pub mod present;
pub mod warstatus;
