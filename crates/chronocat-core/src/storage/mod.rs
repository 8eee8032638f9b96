pub mod database;
pub mod memory;

pub use database::{Database, SessionRecord, Stats};
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Key-value contract every settings backend fulfils.
///
/// All core state is serialized to primitive strings (ISO timestamps, JSON
/// booleans/numbers, plain text) under a fixed key namespace. Absence of a
/// key means "use the documented default", never an error. No transactional
/// guarantee across keys is assumed: each field writes independently and is
/// reconciled on next load.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Returns `~/.config/chronocat[-dev]/` based on CHRONOCAT_ENV.
///
/// Set CHRONOCAT_ENV=dev to use the development data directory, or
/// CHRONOCAT_DATA_DIR to point somewhere else entirely (used by tests).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = if let Ok(dir) = std::env::var("CHRONOCAT_DATA_DIR") {
        PathBuf::from(dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("CHRONOCAT_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("chronocat-dev")
        } else {
            base_dir.join("chronocat")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
