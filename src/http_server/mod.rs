//! # HTTP Server Module
//!
//! Axum server exposing the store over HTTP.
//!
//! # Endpoints
//!
//! - `POST /graphql` - GraphQL queries and mutations
//! - `GET /graphql` - GraphiQL explorer (when enabled)
//! - `POST /api/v1/operation` - named operation as a JSON object
//! - `/health`, `/metrics` - health check and operation counters

pub mod config;
pub mod graphql_routes;
pub mod observability_routes;
pub mod operation_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
