//! Key-Value Store
//!
//! Process-wide mapping from string keys to JSON values.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Store handle shared across concurrent requests.
///
/// Every read and write goes through the lock, so a reader never observes a
/// partially written value and concurrent writers to one key are serialized.
pub type SharedStore = Arc<RwLock<Store>>;

// == Store ==
/// In-memory key-value storage.
///
/// Values are opaque JSON; the store performs no validation of their shape.
/// A stored JSON `null` is a present value, distinct from an absent key.
#[derive(Debug, Default)]
pub struct Store {
    entries: HashMap<String, Value>,
}

impl Store {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Wraps this store for sharing between request handlers.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    // == Set ==
    /// Inserts `value` under `key`, overwriting any previous value.
    pub fn set(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    // == Contains ==
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
