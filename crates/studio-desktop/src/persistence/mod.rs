//! Browser-local key/value persistence
//!
//! The desktop persists one value (the applied background image URL). The
//! store is a trait so the page can supply `window.localStorage` and tests an
//! in-memory map.

mod memory;

pub use memory::MemoryLocalStore;

use crate::error::DesktopError;

/// String key/value store with local-storage semantics.
pub trait LocalStore {
    /// Read a value; `Ok(None)` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, DesktopError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), DesktopError>;

    /// Delete a key (absent keys are not an error)
    fn remove(&mut self, key: &str) -> Result<(), DesktopError>;
}
