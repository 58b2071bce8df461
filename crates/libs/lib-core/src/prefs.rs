//! # Preferences
//!
//! Theme and avatar choices persisted in browser local storage.

use crate::service::KeyValueStore;

/// Local-storage key of the theme class name
pub const THEME_KEY: &str = "chatTheme";
/// Local-storage key of the cached avatar URL
pub const AVATAR_KEY: &str = "userAvatarUrl";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Class name applied to the document body
    pub theme: String,
    pub avatar_url: Option<String>,
}

impl Preferences {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            avatar_url: None,
        }
    }

    /// Read stored preferences, using `default_theme` when none is stored
    /// or the stored value is not a single class name.
    pub fn load(store: &dyn KeyValueStore, default_theme: &str) -> Self {
        let theme = store
            .get(THEME_KEY)
            .filter(|t| lib_utils::validate_class_name(t).is_ok())
            .unwrap_or_else(|| default_theme.to_string());
        let avatar_url = store.get(AVATAR_KEY).filter(|u| !u.is_empty());

        Self { theme, avatar_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> crate::error::Result<()> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_load_defaults() {
        let store = MapStore::default();
        let prefs = Preferences::load(&store, "theme-purple");
        assert_eq!(prefs, Preferences::new("theme-purple"));
    }

    #[test]
    fn test_load_stored_values() {
        let store = MapStore::default();
        store.set(THEME_KEY, "theme-dark").unwrap();
        store.set(AVATAR_KEY, "/uploads/me.png").unwrap();

        let prefs = Preferences::load(&store, "theme-purple");

        assert_eq!(prefs.theme, "theme-dark");
        assert_eq!(prefs.avatar_url.as_deref(), Some("/uploads/me.png"));
    }

    #[test]
    fn test_load_rejects_tampered_theme() {
        for stored in ["a b", "", "theme-dark\" onclick=\"x"] {
            let store = MapStore::default();
            store.set(THEME_KEY, stored).unwrap();

            let prefs = Preferences::load(&store, "theme-purple");

            assert_eq!(prefs.theme, "theme-purple", "stored {:?}", stored);
        }
    }
}
