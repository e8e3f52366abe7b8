//! # HTTP Server
//!
//! Binds the GraphQL endpoint, the unified operation endpoint and the
//! observability routes onto one listener.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::OperationHandler;
use crate::graphql::build_schema;
use crate::observability::{log_event_with_fields, Event};

use super::config::HttpServerConfig;
use super::graphql_routes::graphql_routes;
use super::observability_routes::observability_routes;
use super::operation_routes::operation_routes;

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given handler
    pub fn new(config: HttpServerConfig, handler: OperationHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, handler: OperationHandler) -> Router {
        let schema = build_schema(handler.clone());

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(observability_routes(handler.clone()))
            .merge(graphql_routes(schema, config.graphiql))
            .merge(operation_routes(handler))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(
            Event::Serving,
            &[
                ("addr", &bound),
                ("graphql", "/graphql"),
                ("operation", "/api/v1/operation"),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event_with_fields(Event::ShutdownComplete, &[("addr", &bound)]);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until the process is killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
