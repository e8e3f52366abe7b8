//! HTTP Route Tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bookgraph::api::OperationHandler;
use bookgraph::http_server::{HttpServer, HttpServerConfig};
use bookgraph::store::SharedStore;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn router_with(config: HttpServerConfig) -> Router {
    HttpServer::new(config, OperationHandler::new(SharedStore::default())).router()
}

fn router() -> Router {
    router_with(HttpServerConfig::default())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// =============================================================================
// GraphQL Endpoint
// =============================================================================

#[tokio::test]
async fn test_graphql_query() {
    let (status, body) = send(
        router(),
        post_json("/graphql", json!({"query": "{ book(id: 2) { name author { id } } }"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["book"],
        json!({"name": "Harry Potter and the Prisoner of Azkaban", "author": {"id": 1}})
    );
}

#[tokio::test]
async fn test_graphql_variables() {
    let (_, body) = send(
        router(),
        post_json(
            "/graphql",
            json!({
                "query": "query($id: Int) { author(id: $id) { name } }",
                "variables": {"id": 1}
            }),
        ),
    )
    .await;

    assert_eq!(body["data"]["author"]["name"], json!("J. K. Rowling"));
}

/// State persists across requests on the same router.
#[tokio::test]
async fn test_graphql_mutation_persists() {
    let router = router();

    send(
        router.clone(),
        post_json("/graphql", json!({"query": "mutation { deleteAuthor(id: 3) { id } }"})),
    )
    .await;

    let (_, body) = send(
        router,
        post_json("/graphql", json!({"query": "{ authors { id } }"})),
    )
    .await;
    assert_eq!(body["data"]["authors"], json!([{"id": 1}, {"id": 2}]));
}

#[tokio::test]
async fn test_graphiql_toggle() {
    let response = router().oneshot(get("/graphql")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disabled = HttpServerConfig {
        graphiql: false,
        ..Default::default()
    };
    let response = router_with(disabled).oneshot(get("/graphql")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Operation Endpoint
// =============================================================================

#[tokio::test]
async fn test_operation_query() {
    let (status, body) = send(
        router(),
        post_json("/api/v1/operation", json!({"op": "book", "id": 8})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "data": {"id": 8, "name": "Beyond the Shadows", "authorId": 3}})
    );
}

#[tokio::test]
async fn test_operation_add_book() {
    let (status, body) = send(
        router(),
        post_json(
            "/api/v1/operation",
            json!({"op": "addBook", "name": "The Hobbit", "authorId": 2}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({"id": 9, "name": "The Hobbit", "authorId": 2}));
}

#[tokio::test]
async fn test_operation_not_found() {
    let (status, body) = send(
        router(),
        post_json(
            "/api/v1/operation",
            json!({"op": "updateAuthor", "id": 999, "name": "Ghost"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_operation_unknown_op() {
    let (status, body) = send(
        router(),
        post_json("/api/v1/operation", json!({"op": "dropTables"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("INVALID_REQUEST"));
}

// =============================================================================
// Observability Endpoints
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(router(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn test_metrics_count_operations() {
    let router = router();

    send(
        router.clone(),
        post_json("/api/v1/operation", json!({"op": "books"})),
    )
    .await;
    send(
        router.clone(),
        post_json("/graphql", json!({"query": "mutation { addAuthor(name: \"X\") { id } }"})),
    )
    .await;
    send(
        router.clone(),
        post_json("/api/v1/operation", json!({"op": "deleteBook", "id": 999})),
    )
    .await;

    let (_, body) = send(router, get("/metrics")).await;
    assert_eq!(body["queries_executed"], json!(1));
    assert_eq!(body["mutations_executed"], json!(2));
    assert_eq!(body["operations_failed"], json!(0));
}
