use web_sys::Storage;

use super::PreferenceStore;
use crate::error::ThemeError;

/// Origin-scoped browser `localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Fails when there is no window or the browser refuses access, as some
    /// private browsing modes do.
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage.get_item(key).map_err(ThemeError::storage)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage.set_item(key, value).map_err(ThemeError::storage)
    }
}
