//! Unified Operation Route
//!
//! `POST /api/v1/operation` takes `{"op": "<name>", ...arguments}` and runs
//! it through the shared [`OperationHandler`].

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::api::{ApiError, Operation, OperationHandler, OperationResponse, RequestContext};

/// Create the operation route
pub fn operation_routes(handler: OperationHandler) -> Router {
    Router::new()
        .route("/api/v1/operation", post(execute_operation))
        .with_state(handler)
}

async fn execute_operation(
    State(handler): State<OperationHandler>,
    body: Result<Json<Operation>, JsonRejection>,
) -> (StatusCode, Json<OperationResponse>) {
    let Json(operation) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = ApiError::invalid_request(rejection.body_text());
            return (err.status_code(), Json(OperationResponse::error(&err)));
        }
    };

    let ctx = RequestContext::new();
    match handler.execute(operation, &ctx) {
        Ok(data) => (StatusCode::OK, Json(OperationResponse::success(data))),
        Err(err) => (err.status_code(), Json(OperationResponse::error(&err))),
    }
}
