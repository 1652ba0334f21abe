//! In-memory stand-ins for the browser seams.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::storage::{PreferenceStore, StorageError};
use super::system::SystemPreference;
use super::ColorMode;

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what the controller persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    key: &'static str,
    items: Rc<RefCell<HashMap<&'static str, String>>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    pub fn with_value(key: &'static str, value: &str) -> Self {
        let store = Self::new(key);
        store.items.borrow_mut().insert(key, value.to_string());
        store
    }

    /// A store whose writes always fail, like storage in some private browsing modes.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn get(&self) -> Option<String> {
        self.items.borrow().get(self.key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.get())
    }

    fn save(&self, mode: ColorMode) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: self.key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.items.borrow_mut().insert(self.key, mode.as_str().to_string());
        Ok(())
    }
}

/// A preference fixed up front. `Fixed(None)` behaves like an unsupported platform.
#[derive(Clone, Copy, Debug)]
pub struct Fixed(pub Option<bool>);

impl SystemPreference for Fixed {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new("theme-preference");
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new("theme-preference");
        let handle = store.clone();
        store.save(ColorMode::Light).unwrap();
        assert_eq!(handle.get().as_deref(), Some("light"));
    }

    #[test]
    fn read_only_store_rejects_writes_but_keeps_value() {
        let store = MemoryStore::with_value("theme-preference", "dark").read_only();
        let err = store.save(ColorMode::Light).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(store.get().as_deref(), Some("dark"));
    }
}
