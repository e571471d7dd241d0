//! # Browser `localStorage` backend
//!
//! [`LocalStorageBackend`] is the [`StateBackend`] used on the web platform.
//! Values are written synchronously through [`web_sys::Storage`].
//!
//! Reads swallow errors (private browsing, storage disabled) and return `None`,
//! which the session store treats as a first visit.

use crate::backend::StateBackend;
use crate::error::StoreError;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Storage(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Storage("localStorage disabled".to_string()))
    }
}

impl StateBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{e:?}")))
    }
}
