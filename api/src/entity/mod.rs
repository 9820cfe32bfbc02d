//! SeaORM entities
//!
//! Table models for the persistence adapters.

pub mod animals;
pub mod states;
