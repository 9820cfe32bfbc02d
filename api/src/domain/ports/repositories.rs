//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Animal, State};
use crate::error::DomainError;

/// Repository for Animal entities
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// List every animal, ordered by id
    async fn find_all(&self) -> Result<Vec<Animal>, DomainError>;
}

/// Repository for State entities
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// List every state, ordered by id
    async fn find_all(&self) -> Result<Vec<State>, DomainError>;
}
