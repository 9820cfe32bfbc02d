//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod services;

pub use repositories::{AnimalRepository, StateRepository};
pub use services::{AnimalService, StateService};

#[cfg(test)]
pub use services::{MockAnimalService, MockStateService};
