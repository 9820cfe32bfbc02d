//! Animal service
//!
//! Lists the animal species available for adoption.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Animal;
use crate::domain::ports::{AnimalRepository, AnimalService};
use crate::error::DomainError;

/// Repository-backed implementation of `AnimalService`
pub struct AnimalServiceImpl<AR>
where
    AR: AnimalRepository,
{
    animals: Arc<AR>,
}

impl<AR> AnimalServiceImpl<AR>
where
    AR: AnimalRepository,
{
    pub fn new(animals: Arc<AR>) -> Self {
        Self { animals }
    }
}

#[async_trait]
impl<AR> AnimalService for AnimalServiceImpl<AR>
where
    AR: AnimalRepository,
{
    async fn all(&self) -> Result<Vec<Animal>, DomainError> {
        let animals = self.animals.find_all().await?;
        tracing::debug!(count = animals.len(), "Loaded animals");
        Ok(animals)
    }
}
