//! Unified error types for the Adopet API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Retrieval errors raised by repositories and services
//! - `ConfigError`: Startup configuration errors
//!
//! GraphQL responses carry the `DomainError` message verbatim plus a `code`
//! extension naming the variant.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Retrieval errors raised by repositories and services
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    /// Failure outside the database
    #[allow(dead_code)]
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable machine-readable code for GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Database(_) => "DATABASE",
            DomainError::Internal(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for DomainError {
    fn extend(&self) -> async_graphql::Error {
        match self {
            DomainError::Database(msg) => tracing::error!("Database error: {}", msg),
            DomainError::Internal(msg) => tracing::error!("Internal error: {}", msg),
        }

        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
