//! The persistence seam: a blob of text stored under a fixed key.
//!
//! Implementations live next to this module:
//! - [`crate::MemoryBackend`]: process memory, for tests and as a fallback
//! - [`crate::FileBackend`]: one JSON file per key (desktop)
//! - `LocalStorageBackend`: the browser's `localStorage` (web)

use crate::error::StoreError;

pub trait StateBackend {
    /// The stored value, or `None` when nothing was saved or it cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the stored value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Whether this backend survives a restart.
    fn is_persistent(&self) -> bool {
        true
    }
}
