use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Logs and tooling match on these,
// never on the human-readable message string.

/// Stable error code constants.
///
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const INVALID_ARGUMENT_COUNT: &str = "INVALID_ARGUMENT_COUNT";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const KEY_DERIVATION_FAILED: &str = "KEY_DERIVATION_FAILED";
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const SERIALIZATION_FAILED: &str = "SERIALIZATION_FAILED";
    pub const STORE_READ_FAILED: &str = "STORE_READ_FAILED";
    pub const STORE_WRITE_FAILED: &str = "STORE_WRITE_FAILED";
    pub const UNSUPPORTED_OPERATION: &str = "UNSUPPORTED_OPERATION";
    pub const MVCC_READ_CONFLICT: &str = "MVCC_READ_CONFLICT";
    pub const COMMIT_FAILED: &str = "COMMIT_FAILED";
}

// ── StubError ───────────────────────────────────────────────────────

/// Failure reported by the ledger stub to the chaincode.
#[derive(Error, Debug)]
pub enum StubError {
    /// Composite key could not be built from the given components.
    #[error("{0}")]
    InvalidKey(String),

    /// World-state read failed.
    #[error("{0}")]
    Read(String),

    /// State write was refused.
    #[error("{0}")]
    Write(String),
}

// ── ConfigError ─────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
