//! In-memory implementations of repository ports
//!
//! Rows are returned in insertion order. A repository marked as failing
//! returns `DomainError::Database` with the configured message.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Animal, State};
use crate::domain::ports::{AnimalRepository, StateRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Animal Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAnimalRepository {
    animals: Arc<RwLock<Vec<Animal>>>,
    failure: Option<String>,
}

impl InMemoryAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an animal for testing
    pub fn with_animal(self, animal: Animal) -> Self {
        self.animals.write().unwrap().push(animal);
        self
    }

    /// Make every query fail with a database error
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn find_all(&self) -> Result<Vec<Animal>, DomainError> {
        if let Some(ref msg) = self.failure {
            return Err(DomainError::Database(msg.clone()));
        }
        Ok(self.animals.read().unwrap().clone())
    }
}

// ============================================================================
// In-Memory State Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryStateRepository {
    states: Arc<RwLock<Vec<State>>>,
    failure: Option<String>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a state for testing
    pub fn with_state(self, state: State) -> Self {
        self.states.write().unwrap().push(state);
        self
    }

    /// Make every query fail with a database error
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl StateRepository for InMemoryStateRepository {
    async fn find_all(&self) -> Result<Vec<State>, DomainError> {
        if let Some(ref msg) = self.failure {
            return Err(DomainError::Database(msg.clone()));
        }
        Ok(self.states.read().unwrap().clone())
    }
}
