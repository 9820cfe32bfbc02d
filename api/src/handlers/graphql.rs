//! GraphQL handlers
//!
//! Endpoints serving the GraphQL schema and its in-browser IDE.

use async_graphql::http::GraphiQLSource;
use axum::{extract::State, response::Html, Json};

use crate::graph;
use crate::AppState;

/// Path the GraphQL endpoint is mounted on
pub const GRAPHQL_PATH: &str = "/query";

/// POST /query
///
/// Execute a GraphQL request against the schema.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(graph::execute(&state.schema, request).await)
}

/// GET /
///
/// GraphiQL IDE pointed at the GraphQL endpoint.
pub async fn graphql_playground() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
