//! GraphQL schema
//!
//! `QueryRoot` exposes the `animals` and `states` fields and delegates to the
//! `Resolver` stored as schema data.

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, Name, Object, PathSegment,
    Request, Response, Schema, Value,
};

use super::model::{Animal, State};
use super::resolver::Resolver;

/// The Adopet GraphQL schema type
pub type AdopetSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Animal species available for adoption; `null` when there are none
    async fn animals(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Animal>>> {
        let resolver = ctx.data::<Resolver>()?;
        resolver.query().animals().await.map_err(|e| e.extend())
    }

    /// States where adoptions take place; `null` when there are none
    async fn states(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<State>>> {
        let resolver = ctx.data::<Resolver>()?;
        resolver.query().states().await.map_err(|e| e.extend())
    }
}

/// Build the GraphQL schema with the resolver as context
pub fn build_schema(
    resolver: Resolver,
    depth_limit: usize,
    complexity_limit: usize,
) -> AdopetSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(resolver)
        .limit_depth(depth_limit)
        .limit_complexity(complexity_limit)
        .finish()
}

/// Execute a request, reporting every failed root field as `null` in `data`
pub async fn execute(schema: &AdopetSchema, request: impl Into<Request>) -> Response {
    let mut response = schema.execute(request).await;
    null_failed_root_fields(&mut response);
    response
}

fn null_failed_root_fields(response: &mut Response) {
    let failed: Vec<String> = response
        .errors
        .iter()
        .filter_map(|e| match e.path.first() {
            Some(PathSegment::Field(name)) => Some(name.clone()),
            _ => None,
        })
        .collect();

    if failed.is_empty() {
        return;
    }

    if matches!(response.data, Value::Null) {
        response.data = Value::Object(Default::default());
    }

    if let Value::Object(fields) = &mut response.data {
        for name in failed {
            fields.entry(Name::new(name)).or_insert(Value::Null);
        }
    }
}
