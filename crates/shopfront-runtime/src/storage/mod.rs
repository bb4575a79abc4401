//! Key-value persistence for user preferences.
//!
//! Both operations are synchronous and may fail with
//! `StorageError::Unavailable`; callers treat that as non-fatal.

mod fs;
mod memory;

pub use fs::FileStore;
pub use memory::MemoryStore;

use std::fmt;

#[derive(Debug)]
pub enum StorageError {
    /// The backing store cannot be read or written (permissions, full disk,
    /// read-only data directory, corrupt file)
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
