//! Shared session store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::StateBackend`]:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStorageBackend`
//! - **Desktop** (native): one JSON file under `<data_dir>/fitness-first/`
//! - anything else: [`store::MemoryBackend`], lost on reload

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppBackend = store::LocalStorageBackend;

#[cfg(not(target_arch = "wasm32"))]
pub type AppBackend = store::FileBackend;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppBackend = store::MemoryBackend;

/// Open the platform session store, loading whatever is saved under `key`.
pub fn make_store(key: &str) -> store::SessionStore<AppBackend> {
    store::SessionStore::open(make_backend(), key)
}

/// Where the session is kept, for start-up logging.
pub fn storage_location(key: &str) -> String {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        format!("localStorage[{key}]")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        data_dir().join(format!("{key}.json")).display().to_string()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        format!("memory[{key}]")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("fitness-first")
}

fn make_backend() -> AppBackend {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageBackend::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileBackend::new(data_dir())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        tracing::warn!("No persistent storage on this target; session will not survive a reload");
        store::MemoryBackend::new()
    }
}
