use thiserror::Error;

#[derive(Error, Debug)]
pub enum KVError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A key read by a transaction changed before its writes were applied.
    #[error("read conflict on key {0:?}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(String),
}
