//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod animal;
pub mod state;

pub use animal::Animal;
pub use state::State;
