//! CLI argument definitions using clap
//!
//! Commands:
//! - bookgraph serve [--config <path>] [--host <host>] [--port <port>]
//! - bookgraph exec [--config <path>]
//! - bookgraph schema

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookgraph - authors and books over GraphQL
#[derive(Parser, Debug)]
#[command(name = "bookgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (default: ./bookgraph.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run operations read from stdin, one JSON object per line
    Exec {
        /// Path to configuration file (default: ./bookgraph.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the GraphQL schema (SDL) and exit
    Schema,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
