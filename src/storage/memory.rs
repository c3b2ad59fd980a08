//! In-memory key-value store.

use super::error::StoreError;
use super::KeyValueStore;
use std::collections::HashMap;

/// Key-value store held in a `HashMap`, for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value under `key`.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Make every write fail, to exercise error paths.
    pub fn with_fail_writes(mut self, fail_writes: bool) -> Self {
        self.fail_writes = fail_writes;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("AddressBook").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn write_then_read_returns_value() {
        let mut store = MemoryStore::new();
        store.write("AddressBook", "[]").unwrap();

        assert_eq!(store.read("AddressBook").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let mut store = MemoryStore::new().with_entry("k", "old");
        store.write("k", "new").unwrap();

        assert_eq!(store.read("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn failing_store_rejects_writes() {
        let mut store = MemoryStore::new().with_fail_writes(true);
        let result = store.write("k", "v");

        assert!(matches!(result, Err(StoreError::WriteRejected { .. })));
        assert_eq!(store.read("k").unwrap(), None);
    }
}
