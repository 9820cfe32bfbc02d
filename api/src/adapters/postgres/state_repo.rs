//! PostgreSQL adapter for StateRepository

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::entities::State;
use crate::domain::ports::StateRepository;
use crate::entity::states;
use crate::error::DomainError;

/// PostgreSQL implementation of StateRepository
pub struct PostgresStateRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresStateRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StateRepository for PostgresStateRepository {
    async fn find_all(&self) -> Result<Vec<State>, DomainError> {
        let results = states::Entity::find()
            .order_by_asc(states::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<states::Model> for State {
    fn from(model: states::Model) -> Self {
        State {
            id: model.id,
            name: model.name,
            initials: model.initials,
        }
    }
}
