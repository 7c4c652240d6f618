//! Key-value persistence backing the entry store.
//!
//! The journal only ever needs two operations from its storage: read the
//! string stored under a key, and replace it. `KeyValueStore` captures that
//! contract so the entry store can run against the on-disk `FileStore` in the
//! application and against `MemoryStore` in tests.

mod file;

pub use file::{ensure_data_directory_exists, FileStore};

use crate::errors::AppResult;
use std::collections::BTreeMap;

/// A synchronous string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Implementations must have durably applied the write when this returns `Ok`.
    fn set(&mut self, key: &str, value: String) -> AppResult<()>;
}

/// In-memory store, used as a test double and for throwaway sessions.
///
/// # Examples
///
/// ```
/// use care::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// assert_eq!(store.get("k"), None);
/// store.set("k", "v".to_string()).unwrap();
/// assert_eq!(store.get("k").as_deref(), Some("v"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value.
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.into());
        MemoryStore { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.set("key", "one".to_string()).unwrap();
        store.set("key", "two".to_string()).unwrap();

        assert_eq!(store.get("key").as_deref(), Some("two"));
    }

    #[test]
    fn test_memory_store_with_value() {
        let store = MemoryStore::with_value("key", "preset");
        assert_eq!(store.get("key").as_deref(), Some("preset"));
        assert_eq!(store.get("other"), None);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("key", "value".to_string()).unwrap();
        assert_eq!(store.get("key").as_deref(), Some("value"));
    }
}
