use crate::error::KVError;

/// KVStore is the world-state interface the chaincode host writes through.
///
/// Keys are strings; composite keys (see [`crate::composite`]) start with
/// `U+0000` and so never collide with plain keys.
pub trait KVStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a single key-value pair.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError>;

    /// Write `entries` in one transaction, provided every key in `expected`
    /// still holds the value it was read with (`None` means absent).
    ///
    /// On the first mismatch nothing is written and `KVError::Conflict`
    /// names the stale key.
    fn batch_set_if_unchanged(
        &self,
        expected: &[(&str, Option<&[u8]>)],
        entries: &[(&str, &[u8])],
    ) -> Result<(), KVError>;

    /// Scan all keys matching a prefix. Returns sorted (key, value) pairs.
    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError>;
}
