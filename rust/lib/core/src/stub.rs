use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Arc;

use chaincode_kv::{KVError, KVStore, create_composite_key};
use tracing::debug;

use crate::error::StubError;

/// The ledger access a chaincode gets during one transaction.
pub trait LedgerStub {
    /// Identifier of the running transaction.
    fn tx_id(&self) -> &str;

    /// Build a composite key (see [`chaincode_kv::composite`]).
    fn create_composite_key(&self, object_type: &str, attributes: &[&str]) -> Result<String, StubError> {
        create_composite_key(object_type, attributes).map_err(|e| StubError::InvalidKey(e.to_string()))
    }

    /// Read committed state for `key`. Writes made earlier in the same
    /// transaction are not visible.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError>;

    /// Stage a write for `key`.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StubError>;
}

/// Stub for a single transaction over a [`KVStore`].
///
/// Reads go straight to the store and are remembered, together with the value
/// observed, in a read set. Writes are staged in a write set. `commit` applies
/// the write set only if every read is still current, so a transaction that
/// decided based on stale state writes nothing.
pub struct TxStub {
    kv: Arc<dyn KVStore>,
    tx_id: String,
    read_set: RefCell<BTreeMap<String, Option<Vec<u8>>>>,
    write_set: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl TxStub {
    pub fn new(kv: Arc<dyn KVStore>, tx_id: impl Into<String>) -> Self {
        Self {
            kv,
            tx_id: tx_id.into(),
            read_set: RefCell::new(BTreeMap::new()),
            write_set: RefCell::new(BTreeMap::new()),
        }
    }

    /// Apply the write set, validated against the read set.
    ///
    /// Returns the number of keys written; a read-only transaction writes
    /// nothing and always succeeds.
    pub fn commit(self) -> Result<usize, KVError> {
        let read_set = self.read_set.into_inner();
        let write_set = self.write_set.into_inner();
        if write_set.is_empty() {
            return Ok(0);
        }

        let expected: Vec<(&str, Option<&[u8]>)> = read_set
            .iter()
            .map(|(key, seen)| (key.as_str(), seen.as_deref()))
            .collect();
        let entries: Vec<(&str, &[u8])> = write_set
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_slice()))
            .collect();

        self.kv.batch_set_if_unchanged(&expected, &entries)?;
        debug!(tx_id = %self.tx_id, reads = expected.len(), writes = entries.len(), "write set committed");
        Ok(entries.len())
    }
}

impl LedgerStub for TxStub {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StubError> {
        let value = self.kv.get(key).map_err(|e| StubError::Read(e.to_string()))?;
        self.read_set
            .borrow_mut()
            .entry(key.to_string())
            .or_insert_with(|| value.clone());
        Ok(value)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StubError> {
        if key.is_empty() {
            return Err(StubError::Write("key must not be an empty string".to_string()));
        }
        self.write_set.borrow_mut().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
