//! In-memory settings store for tests and embedders that bring their own
//! persistence.

use std::collections::HashMap;
use std::sync::Mutex;

use super::SettingsStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .map
            .lock()
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map
            .lock()
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.map
            .lock()
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .remove(key);
        Ok(())
    }
}
