mod local;
mod memory;

pub use local::LocalStorageStore;
pub use memory::MemoryStore;

use std::rc::Rc;

use crate::error::ThemeError;

/// Durable key-value storage for the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).set(key, value)
    }
}

/// Picks `localStorage` when the browser exposes it, falling back to an
/// in-memory store so the theme can still be switched for this session.
pub fn open_preference_store() -> Box<dyn PreferenceStore> {
    match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{}; theme preference will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    }
}
