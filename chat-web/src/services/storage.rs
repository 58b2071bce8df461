//! `localStorage`-backed preference store

use lib_core::{AppError, KeyValueStore};
use web_sys::Storage;

pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> lib_core::Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| AppError::Storage(format!("{:?}", err)))
    }
}
