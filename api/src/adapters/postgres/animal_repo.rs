//! PostgreSQL adapter for AnimalRepository

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::entities::Animal;
use crate::domain::ports::AnimalRepository;
use crate::entity::animals;
use crate::error::DomainError;

/// PostgreSQL implementation of AnimalRepository
pub struct PostgresAnimalRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresAnimalRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnimalRepository for PostgresAnimalRepository {
    async fn find_all(&self) -> Result<Vec<Animal>, DomainError> {
        let results = animals::Entity::find()
            .order_by_asc(animals::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<animals::Model> for Animal {
    fn from(model: animals::Model) -> Self {
        Animal {
            id: model.id,
            name: model.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::*;

    #[tokio::test]
    async fn find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                animals::Model {
                    id: 1,
                    name: "Cão".to_string(),
                },
                animals::Model {
                    id: 2,
                    name: "Gato".to_string(),
                },
            ]])
            .into_connection();
        let repo = PostgresAnimalRepository::new(Arc::new(db));

        let animals = repo.find_all().await.unwrap();

        assert_eq!(
            animals,
            vec![
                Animal {
                    id: 1,
                    name: "Cão".to_string()
                },
                Animal {
                    id: 2,
                    name: "Gato".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn find_all_empty_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<animals::Model>::new()])
            .into_connection();
        let repo = PostgresAnimalRepository::new(Arc::new(db));

        let animals = repo.find_all().await.unwrap();

        assert!(animals.is_empty());
    }

    #[tokio::test]
    async fn find_all_maps_db_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("fail".to_string())])
            .into_connection();
        let repo = PostgresAnimalRepository::new(Arc::new(db));

        let result = repo.find_all().await;

        match result {
            Err(DomainError::Database(msg)) => assert!(msg.contains("fail")),
            other => panic!("expected database error, got {:?}", other),
        }
    }
}
