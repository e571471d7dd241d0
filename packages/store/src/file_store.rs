//! # Filesystem-backed session storage
//!
//! [`FileBackend`] keeps each key in its own JSON file. It is used on desktop
//! so the session survives app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json          # the serialised session
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `fitness-first`
//! to obtain a platform-appropriate base.

use std::path::PathBuf;

use crate::backend::StateBackend;
use crate::error::StoreError;

#[derive(Clone, Debug)]
pub struct FileBackend {
    base: PathBuf,
}

impl FileBackend {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl StateBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.value_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.value_path(key), value)?;
        Ok(())
    }
}
