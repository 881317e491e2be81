use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Host configuration for running chaincode against a local ledger.
///
/// Read from an optional TOML file; command-line flags override individual
/// fields afterwards.
///
/// ```toml
/// data_dir = "/var/lib/contract"
/// log_filter = "chaincode_contract=debug,info"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory holding the ledger database.
    pub data_dir: Option<PathBuf>,

    /// Path to the redb ledger file.
    /// Defaults to `{data_dir}/ledger.redb` if not specified.
    pub db_path: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            db_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Resolve the ledger path, falling back to `{data_dir}/ledger.redb`.
    pub fn resolve_db_path(&self) -> PathBuf {
        self.db_path.clone().unwrap_or_else(|| {
            self.data_dir
                .as_ref()
                .map(|d| d.join("ledger.redb"))
                .unwrap_or_else(|| PathBuf::from("ledger.redb"))
        })
    }
}
