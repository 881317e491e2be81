use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::error::KVError;
use crate::traits::KVStore;

/// MemoryStore keeps the world state in a `BTreeMap` behind an `RwLock`.
///
/// Nothing is persisted. The checked batch holds the write lock for the
/// whole check-and-apply, so it has the same atomicity as `RedbStore`.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

fn poisoned<T>(_: PoisonError<T>) -> KVError {
    KVError::Storage("memory store lock poisoned".to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize, KVError> {
        Ok(self.entries.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, KVError> {
        Ok(self.len()? == 0)
    }
}

impl KVStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn batch_set_if_unchanged(
        &self,
        expected: &[(&str, Option<&[u8]>)],
        entries: &[(&str, &[u8])],
    ) -> Result<(), KVError> {
        let mut state = self.entries.write().map_err(poisoned)?;

        for (key, seen) in expected {
            if state.get(*key).map(Vec::as_slice) != *seen {
                return Err(KVError::Conflict(key.to_string()));
            }
        }
        for (key, value) in entries {
            state.insert(key.to_string(), value.to_vec());
        }
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError> {
        let entries = self.entries.read().map_err(poisoned)?;
        let results = entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(results)
    }
}
