//! Persisted store boundary.
//!
//! The address book mirrors its contact list into a string key-value store
//! after every change and reads it back on startup. The store itself knows
//! nothing about contacts; [`load_contacts`] and [`save_contacts`] handle
//! the JSON encoding.
//!
//! # Example
//!
//! ```rust
//! use address_book::storage::{load_contacts, save_contacts, MemoryStore, STORAGE_KEY};
//!
//! let mut store = MemoryStore::new();
//! assert!(load_contacts(&store, STORAGE_KEY).unwrap().is_empty());
//!
//! save_contacts(&mut store, STORAGE_KEY, &[]).unwrap();
//! ```

pub mod error;
mod file;
mod memory;
mod persist;

pub use error::{LoadError, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persist::{load_contacts, save_contacts, STORAGE_KEY};

/// A durable string store addressed by key.
///
/// No transactions and no versioning: a write replaces the value, a read
/// returns the last value written (or `None`).
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}
