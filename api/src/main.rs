//! Adopet API Server
//!
//! GraphQL read API for the Adopet pet-adoption backend.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod graph;
mod handlers;

#[cfg(test)]
mod test_utils;

use adapters::{PostgresAnimalRepository, PostgresStateRepository};
use app::{AnimalServiceImpl, StateServiceImpl};
use config::Config;
use graph::{build_schema, AdopetSchema, Resolver, Services};
use handlers::graphql::GRAPHQL_PATH;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: AdopetSchema,
    pub playground: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router for the given state
pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        // Health check
        .route("/health", get(health))
        // GraphQL endpoint
        .route(GRAPHQL_PATH, post(handlers::graphql_handler));

    if state.playground {
        app = app.route("/", get(handlers::graphql_playground));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,adopet_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Adopet API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .context("Failed to connect to database")?,
    );
    tracing::info!("Database connected");

    // Create adapters
    let animal_repo = Arc::new(PostgresAnimalRepository::new(db.clone()));
    let state_repo = Arc::new(PostgresStateRepository::new(db.clone()));

    // Create application services
    let services = Services {
        animal_service: Arc::new(AnimalServiceImpl::new(animal_repo)),
        state_service: Arc::new(StateServiceImpl::new(state_repo)),
    };

    let schema = build_schema(
        Resolver::new(services),
        config.graphql_depth_limit,
        config.graphql_complexity_limit,
    );

    let state = AppState {
        schema,
        playground: config.graphql_playground,
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
