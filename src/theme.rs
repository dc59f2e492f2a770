//! Dark/light preference: storage format, persistence and the document attribute.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use web_sys::Storage;

use crate::config::THEME_STORAGE_KEY;
use crate::dom;
use crate::error::{Result, SiteError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Anything other than a recognised stored value falls back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(SiteError::UnknownTheme(other.to_string())),
        }
    }
}

/// Key/value persistence for UI preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl PreferenceStore for Storage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_item(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.set_item(key, value)?)
    }
}

pub fn browser_store() -> Result<Storage> {
    dom::window()?
        .local_storage()?
        .ok_or(SiteError::NoStorage)
}

pub fn load(store: &impl PreferenceStore) -> ThemePreference {
    match store.read(THEME_STORAGE_KEY) {
        Ok(stored) => ThemePreference::from_stored(stored.as_deref()),
        Err(err) => {
            warn!("could not read theme preference: {}", err);
            ThemePreference::default()
        }
    }
}

pub fn persist(store: &impl PreferenceStore, theme: ThemePreference) {
    if let Err(err) = store.write(THEME_STORAGE_KEY, theme.as_str()) {
        warn!("could not persist theme preference: {}", err);
    }
}

/// Startup read from local storage. Without storage the default applies.
pub fn load_from_browser() -> ThemePreference {
    match browser_store() {
        Ok(storage) => load(&storage),
        Err(err) => {
            warn!("{}, using default theme", err);
            ThemePreference::default()
        }
    }
}

/// Persists the preference and reflects it on `<html>` as the `dark`
/// class plus a `data-theme` attribute.
pub fn sync_to_browser(theme: ThemePreference) {
    match browser_store() {
        Ok(storage) => persist(&storage, theme),
        Err(err) => warn!("{}, theme not persisted", err),
    }

    let root = dom::document().ok().and_then(|d| d.document_element());
    let Some(root) = root else {
        return;
    };
    let classes = root.class_list();
    let _ = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
    debug!("theme applied: {}", theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        fail: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            if self.fail {
                return Err(SiteError::NoStorage);
            }
            Ok(self.items.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<()> {
            if self.fail {
                return Err(SiteError::NoStorage);
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_absent_preference_defaults_to_dark() {
        let store = MemoryStore::default();
        assert_eq!(load(&store), ThemePreference::Dark);
    }

    #[test]
    fn test_unrecognised_preference_defaults_to_dark() {
        assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("Light")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_twice_restores_persisted_value() {
        let store = MemoryStore::default();
        persist(&store, ThemePreference::Light);
        let original = load(&store);

        let once = original.toggled();
        persist(&store, once);
        assert_eq!(store.items.borrow()["theme"], "dark");

        persist(&store, once.toggled());
        assert_eq!(store.items.borrow()["theme"], "light");
        assert_eq!(load(&store), original);
    }

    #[test]
    fn test_persisted_strings_are_exact() {
        let store = MemoryStore::default();
        for theme in [ThemePreference::Dark, ThemePreference::Light] {
            persist(&store, theme);
            let stored = store.items.borrow()["theme"].clone();
            assert!(stored == "dark" || stored == "light");
            assert_eq!(stored, theme.to_string());
        }
    }

    #[test]
    fn test_storage_failure_falls_back_quietly() {
        let store = MemoryStore { fail: true, ..Default::default() };
        assert_eq!(load(&store), ThemePreference::Dark);
        persist(&store, ThemePreference::Light);
    }
}
