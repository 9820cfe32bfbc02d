//! GraphQL layer
//!
//! - `model`: GraphQL-facing DTOs derived from domain entities
//! - `resolver`: query resolvers over the service registry
//! - `schema`: async-graphql schema wiring

pub mod model;
pub mod resolver;
pub mod schema;

pub use resolver::{Resolver, Services};
pub use schema::{build_schema, execute, AdopetSchema};
