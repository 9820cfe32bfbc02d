//! Query resolvers
//!
//! Resolvers fetch entities from the injected services and convert them to
//! GraphQL models. Service errors pass through untouched.

use std::sync::Arc;

use crate::domain::ports::{AnimalService, StateService};
use crate::error::DomainError;

use super::model::{Animal, State};

/// Registry of the services the resolvers depend on
#[derive(Clone)]
pub struct Services {
    pub animal_service: Arc<dyn AnimalService>,
    pub state_service: Arc<dyn StateService>,
}

/// Root resolver, stored as schema data
#[derive(Clone)]
pub struct Resolver {
    pub services: Services,
}

impl Resolver {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub fn query(&self) -> QueryResolver<'_> {
        QueryResolver { resolver: self }
    }
}

/// Resolvers for the fields of the `Query` type
pub struct QueryResolver<'a> {
    resolver: &'a Resolver,
}

impl QueryResolver<'_> {
    /// Returns `None` when there are no animals
    pub async fn animals(&self) -> Result<Option<Vec<Animal>>, DomainError> {
        let animals = self.resolver.services.animal_service.all().await?;
        Ok(into_models(animals))
    }

    /// Returns `None` when there are no states
    pub async fn states(&self) -> Result<Option<Vec<State>>, DomainError> {
        let states = self.resolver.services.state_service.all().await?;
        Ok(into_models(states))
    }
}

// TODO: return an empty list instead of None once clients stop relying on `null` for "no rows".
fn into_models<E, M>(entities: Vec<E>) -> Option<Vec<M>>
where
    M: From<E>,
{
    if entities.is_empty() {
        return None;
    }

    Some(entities.into_iter().map(M::from).collect())
}
