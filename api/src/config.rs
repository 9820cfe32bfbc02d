use std::env;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Serve the GraphQL playground on `GET /`
    pub graphql_playground: bool,
    /// Maximum nesting depth accepted by the GraphQL schema
    pub graphql_depth_limit: usize,
    /// Maximum query complexity accepted by the GraphQL schema
    pub graphql_complexity_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            port: parse_or("PORT", lookup("PORT"), 8080)?,
            graphql_playground: parse_or("GRAPHQL_PLAYGROUND", lookup("GRAPHQL_PLAYGROUND"), true)?,
            graphql_depth_limit: parse_or("GRAPHQL_DEPTH_LIMIT", lookup("GRAPHQL_DEPTH_LIMIT"), 10)?,
            graphql_complexity_limit: parse_or(
                "GRAPHQL_COMPLEXITY_LIMIT",
                lookup("GRAPHQL_COMPLEXITY_LIMIT"),
                200,
            )?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
