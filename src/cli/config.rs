//! Configuration file handling
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 5000, "cors_origins": [], "graphiql": true },
//!   "store": { "id_allocation": "counter", "seed": true }
//! }
//! ```
//!
//! Every field is optional. When no path is given, `./bookgraph.json` is read
//! if it exists and defaults are used otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::store::{DataStore, IdAllocation};

use super::errors::{CliError, CliResult};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "bookgraph.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Id scheme for new records (default: "counter")
    #[serde(default)]
    pub id_allocation: IdAllocation,

    /// Load the authors/books fixture at startup (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_allocation: IdAllocation::default(),
            seed: default_seed(),
        }
    }
}

impl StoreConfig {
    /// Build the store this config describes
    pub fn build(&self) -> DataStore {
        if self.seed {
            DataStore::seeded(self.id_allocation)
        } else {
            DataStore::empty(self.id_allocation)
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the explicit path, or the default file when present, or defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        match path {
            Some(path) => Ok((Self::load(path)?, Some(path.to_path_buf()))),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default.is_file() {
                    Ok((Self::load(&default)?, Some(default)))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        Ok(())
    }
}
