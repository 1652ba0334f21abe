use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::ColorMode;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Durable home for the user's theme choice.
pub trait PreferenceStore {
    /// `Ok(None)` means nothing was stored, which is a valid state.
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, mode: ColorMode) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up per call so a storage that becomes
/// unavailable mid-session degrades instead of holding a stale handle.
pub struct LocalStorage {
    key: &'static str,
}

impl LocalStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(self.key)
            .map_err(|err| StorageError::Read {
                key: self.key.to_string(),
                reason: describe(err),
            })
    }

    fn save(&self, mode: ColorMode) -> Result<(), StorageError> {
        self.storage()?
            .set_item(self.key, mode.as_str())
            .map_err(|err| StorageError::Write {
                key: self.key.to_string(),
                reason: describe(err),
            })
    }
}
