pub mod records;
pub mod users;

pub use records::RecordStore;
pub use users::{UserCredential, UserStore};

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Read a JSON data file, falling back to the default shape when the file is
/// missing, empty or corrupt. Earlier versions of the data files left empty
/// or half-written blobs behind; those must not brick the store.
pub(crate) fn load_or_default<T>(path: &Path) -> T
where
    T: Default + DeserializeOwned,
{
    match std::fs::read_to_string(path) {
        Ok(content) if !content.trim().is_empty() => {
            serde_json::from_str(content.trim()).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Data file unreadable, starting from empty"
                );
                T::default()
            })
        }
        _ => T::default(),
    }
}

pub(crate) fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}
