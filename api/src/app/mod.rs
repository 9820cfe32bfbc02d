//! Application layer
//!
//! Service implementations backing the domain service ports.
//! Services coordinate between domain entities and repository ports.

pub mod animal_service;
pub mod state_service;

pub use animal_service::AnimalServiceImpl;
pub use state_service::StateServiceImpl;
