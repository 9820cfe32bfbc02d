//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod animal_repo;
pub mod state_repo;


pub use animal_repo::PostgresAnimalRepository;
pub use state_repo::PostgresStateRepository;
