pub mod file;
pub mod key;
pub mod memory;
pub mod tracker;

use thiserror::Error;

pub use file::FileStore;
pub use key::StoreKey;
pub use memory::MemoryStore;
pub use tracker::TrackerStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid store key: {0}")]
    InvalidKey(String),
    #[error("Stored value under '{0}' is unreadable; clear it before writing")]
    Corrupt(String),
}

/// Durable string-to-text storage. Values are serialized records.
///
/// Accessed read-then-write without transactions; two writers on the same
/// medium race with last-write-wins.
pub trait KeyValueStore {
    fn get(&self, key: &StoreKey) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &StoreKey, value: String) -> Result<(), StoreError>;

    /// Removing an absent key is a no-op.
    fn remove(&mut self, key: &StoreKey) -> Result<(), StoreError>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &mut K {
    fn get(&self, key: &StoreKey) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &StoreKey, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &StoreKey) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
