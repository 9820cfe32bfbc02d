//! State service
//!
//! Lists the states where adoptions can take place.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::State;
use crate::domain::ports::{StateRepository, StateService};
use crate::error::DomainError;

/// Repository-backed implementation of `StateService`
pub struct StateServiceImpl<SR>
where
    SR: StateRepository,
{
    states: Arc<SR>,
}

impl<SR> StateServiceImpl<SR>
where
    SR: StateRepository,
{
    pub fn new(states: Arc<SR>) -> Self {
        Self { states }
    }
}

#[async_trait]
impl<SR> StateService for StateServiceImpl<SR>
where
    SR: StateRepository,
{
    async fn all(&self) -> Result<Vec<State>, DomainError> {
        let states = self.states.find_all().await?;
        tracing::debug!(count = states.len(), "Loaded states");
        Ok(states)
    }
}
