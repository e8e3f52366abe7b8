//! CLI module for bookgraph
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - exec: Run JSON operations from stdin
//! - schema: Print the GraphQL SDL

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{exec, exec_lines, run, run_command, schema, serve};
pub use config::{Config, StoreConfig, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
