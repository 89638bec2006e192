//! In-memory preferences, for tests and embedding.

use std::collections::HashMap;

use super::{StorageBackend, StorageResult};

/// Preferences held in a map; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<(String, String), String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value directly, bypassing any store.
    pub fn with_value(mut self, namespace: &str, key: &str, value: impl Into<String>) -> Self {
        self.values
            .insert((namespace.to_string(), key.to_string()), value.into());
        self
    }

    /// Returns the raw value under `key`, if present.
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.values
            .get(&(namespace.to_string(), key.to_string()))
            .map(String::as_str)
    }
}

impl StorageBackend for MemoryPrefs {
    fn read(&self, namespace: &str, key: &str) -> StorageResult<Option<String>> {
        Ok(self.get(namespace, key).map(str::to_string))
    }

    fn write(&mut self, namespace: &str, key: &str, value: &str) -> StorageResult<()> {
        self.values
            .insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
