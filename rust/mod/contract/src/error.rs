use chaincode_core::error_code;
use thiserror::Error;

/// Contract chaincode error type.
///
/// Every variant ends the invocation; the display string becomes the
/// message of the error response.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Names the empty field.
    #[error("invalid args: {0} must not be empty")]
    InvalidArgument(&'static str),

    #[error("create key error: {0}")]
    KeyDerivationFailure(String),

    #[error("contract {0} already exists")]
    AlreadyExists(String),

    #[error("contract {0} not found")]
    NotFound(String),

    #[error("marshal contract error: {0}")]
    SerializationFailure(String),

    #[error("get contract error: {0}")]
    StoreReadFailure(String),

    #[error("put contract error: {0}")]
    StoreWriteFailure(String),

    #[error("unsupported function: {0}")]
    UnsupportedOperation(String),
}

impl ContractError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContractError::InvalidArgumentCount { .. } => error_code::INVALID_ARGUMENT_COUNT,
            ContractError::InvalidArgument(_) => error_code::INVALID_ARGUMENT,
            ContractError::KeyDerivationFailure(_) => error_code::KEY_DERIVATION_FAILED,
            ContractError::AlreadyExists(_) => error_code::ALREADY_EXISTS,
            ContractError::NotFound(_) => error_code::NOT_FOUND,
            ContractError::SerializationFailure(_) => error_code::SERIALIZATION_FAILED,
            ContractError::StoreReadFailure(_) => error_code::STORE_READ_FAILED,
            ContractError::StoreWriteFailure(_) => error_code::STORE_WRITE_FAILED,
            ContractError::UnsupportedOperation(_) => error_code::UNSUPPORTED_OPERATION,
        }
    }
}
