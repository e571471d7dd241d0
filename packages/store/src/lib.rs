pub mod catalog;
pub mod config;
pub mod routes;
pub mod session;

mod backend;
mod error;
mod manager;

mod memory;
pub use memory::MemoryBackend;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageBackend;

pub use backend::StateBackend;
pub use config::GymConfig;
pub use error::StoreError;
pub use manager::{load, save, SessionStore};
pub use routes::{normalize_path, Page};
pub use session::{Advice, Advisory, NoticeLevel, PaymentForm, SessionState};
