//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod graphql;

pub use graphql::{graphql_handler, graphql_playground};
