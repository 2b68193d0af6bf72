//! In-memory local store

use std::collections::HashMap;

use super::LocalStore;
use crate::error::DesktopError;

/// [`LocalStore`] backed by a `HashMap`.
#[derive(Clone, Debug, Default)]
pub struct MemoryLocalStore {
    entries: HashMap<String, String>,
    /// When set, every write fails (quota exceeded, private mode)
    read_only: bool,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Make writes fail
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self) -> Result<(), DesktopError> {
        if self.read_only {
            return Err(DesktopError::LocalStorage("storage is read-only".to_string()));
        }
        Ok(())
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, DesktopError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DesktopError> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DesktopError> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }
}
