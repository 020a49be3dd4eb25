//! # Key-value storage abstraction
//!
//! [`KeyValueStore`] is the durable, string-keyed storage the client keeps on the
//! device. It mirrors the browser's `localStorage` semantics: string keys, string
//! values, reads that never fail (a broken or missing backend reads as empty) and
//! writes that report failure to the caller.
//!
//! Implementations live in sibling modules:
//!
//! | Type | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryStore`] | any | process memory, for tests and fallback |
//! | [`crate::FileStore`] | native | a TOML file in the platform data directory |
//! | [`crate::LocalStorage`] | web | `window.localStorage` |

/// Errors reported by [`KeyValueStore`] writes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage cannot be reached (no window, storage disabled, quota).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode stored entries: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    /// Read a value. Missing keys and unreadable storage both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
