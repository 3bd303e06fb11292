//! Key/value persistence boundary
//!
//! Progress and settings are serialized to JSON strings and stored under
//! fixed keys. The trait keeps the engine independent of where those strings
//! live: the app ships [`FileStorage`], tests use [`MemoryStorage`].

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors surfaced by a storage backend.
///
/// Callers in this crate treat read errors as "no data" and write errors as
/// lost-session no-ops; the error type exists so backends can report what
/// actually went wrong to the log.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Generic string key/value store.
pub trait Storage: Send + Sync {
    /// Returns the stored value for `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
