use std::collections::BTreeMap;

use super::{KeyValueStore, StoreError, StoreKey};

/// In-process store. Nothing survives the value being dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &StoreKey> {
        self.entries.keys()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &StoreKey, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.clone(), value);
        Ok(())
    }

    fn remove(&mut self, key: &StoreKey) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
