use thiserror::Error;

/// Failures while reading or writing the persisted session.
///
/// None of these reach the user: the session store logs them and keeps the
/// in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend unavailable: {0}")]
    Storage(String),
    #[error("could not encode session: {0}")]
    Serialize(#[from] serde_json::Error),
}
