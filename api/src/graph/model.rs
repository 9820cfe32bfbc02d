//! GraphQL models
//!
//! Identifiers are exposed as `ID` scalars holding the decimal form of the
//! entity's integer id.

use async_graphql::{SimpleObject, ID};

use crate::domain::entities;

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Animal {
    pub id: ID,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct State {
    pub id: ID,
    pub name: String,
    pub initials: String,
}

impl From<entities::Animal> for Animal {
    fn from(animal: entities::Animal) -> Self {
        Animal {
            id: ID(animal.id.to_string()),
            name: animal.name,
        }
    }
}

impl From<entities::State> for State {
    fn from(state: entities::State) -> Self {
        State {
            id: ID(state.id.to_string()),
            name: state.name,
            initials: state.initials,
        }
    }
}
