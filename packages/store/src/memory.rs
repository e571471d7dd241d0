use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::StateBackend;
use crate::error::StoreError;

/// In-memory backend for testing and as a fallback when no storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `value` under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend.insert(key, value);
        backend
    }

    fn insert(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

impl StateBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
