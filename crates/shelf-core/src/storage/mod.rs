//! Storage layer
//!
//! Book data lives under a single string key in a key-value text store,
//! the same shape as browser local storage.
//!
//! ## Backends
//!
//! - **MemoryStore**: in-process map, used by tests
//! - **FileStore**: one JSON file per key, written atomically
//! - **SqliteStore**: a single `kv` table
//!
//! A backend that reports itself unavailable is treated by the repository
//! as empty on read and ignored on write.

pub mod error;
pub mod file;
pub mod memory;
pub mod sqlite;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// String values addressed by string keys
pub trait KeyValueStore {
    /// Whether the backend can be used at all
    fn is_available(&self) -> bool;

    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
