//! bookgraph - an in-memory authors and books catalogue served over GraphQL
//!
//! The store starts from a fixed fixture and lives only as long as the
//! process. Every query and mutation is also available as a named JSON
//! operation, over HTTP or from stdin.

pub mod api;
pub mod cli;
pub mod graphql;
pub mod http_server;
pub mod observability;
pub mod resolver;
pub mod store;
