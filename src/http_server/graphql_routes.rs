//! GraphQL HTTP Routes
//!
//! `POST /graphql` executes a GraphQL request; `GET /graphql` serves the
//! GraphiQL explorer when enabled.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::post,
    Router,
};

use crate::api::RequestContext;
use crate::graphql::LibrarySchema;

/// Create GraphQL routes
pub fn graphql_routes(schema: LibrarySchema, graphiql: bool) -> Router {
    let route = if graphiql {
        post(graphql_handler).get(graphiql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new().route("/graphql", route).with_state(schema)
}

async fn graphql_handler(
    State(schema): State<LibrarySchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner().data(RequestContext::new());
    schema.execute(request).await.into()
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
