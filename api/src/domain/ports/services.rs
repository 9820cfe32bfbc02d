//! Service port traits
//!
//! The data-access boundary seen by the GraphQL resolvers. Resolvers hold
//! these as trait objects so tests can swap in `mockall` doubles.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{Animal, State};
use crate::error::DomainError;

/// Retrieval of animals
///
/// On failure no partial results are returned.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnimalService: Send + Sync {
    async fn all(&self) -> Result<Vec<Animal>, DomainError>;
}

/// Retrieval of states
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StateService: Send + Sync {
    async fn all(&self) -> Result<Vec<State>, DomainError>;
}
