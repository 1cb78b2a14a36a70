//! Preference Storage
//!
//! Key/value persistence for the theme preference. The browser build stores
//! into `localStorage`; [`MemoryStore`] covers headless runs and browsers where
//! storage is unavailable.

use std::collections::HashMap;

use crate::error::{DashboardError, DashboardResult};

/// Persistent string key/value area
pub trait PreferenceStore {
    /// Stored value for `key`; read failures count as "not stored"
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()>;
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key = value`
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Reject every write, like a full or disabled storage area
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        if self.read_only {
            return Err(DashboardError::Storage(format!(
                "store is read-only, cannot write {}",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
