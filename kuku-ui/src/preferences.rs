//! Durable user preferences
//!
//! One JSON file under the user's home directory holds everything the app
//! persists; today that is the theme choice. Access goes through the
//! [`PreferenceStore`] capability so the theme manager can be tested against
//! an in-memory store, and the OS dark-mode signal is behind [`SystemTheme`]
//! for the same reason.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Preference key for the theme choice; value is "dark" or "light"
pub const THEME_KEY: &str = "theme";

/// String key-value capability over the durable preference file.
///
/// A failed `set` degrades to a session-only preference; callers log and
/// carry on.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read-only "prefers dark color scheme" platform signal
pub trait SystemTheme {
    fn prefers_dark(&self) -> bool;
}

/// On-disk preference contents
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Theme choice ("dark" or "light"); absent until the user first toggles
    #[serde(default)]
    pub theme: Option<String>,
}

impl Preferences {
    /// Default preferences file path
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".kukuverse").join("preferences.json")
    }

    /// Load from disk; unreadable or unparsable files fall back to defaults
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<Preferences>(&content) {
                    Ok(prefs) => return prefs,
                    Err(e) => {
                        log::warn!("Failed to parse preferences: {}", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read preferences file: {}", e);
                }
            }
        }

        Self::default()
    }

    /// Save to disk, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}

/// File-backed preference store
pub struct FilePreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl FilePreferenceStore {
    /// Open the store at the default location
    pub fn open_default() -> Self {
        Self::open(Preferences::default_path())
    }

    /// Open the store at a specific path, loading any existing contents
    pub fn open(path: PathBuf) -> Self {
        let prefs = Preferences::load(&path);
        Self { path, prefs }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            THEME_KEY => self.prefs.theme.clone(),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            THEME_KEY => self.prefs.theme = Some(value.to_string()),
            _ => bail!("unknown preference key: {}", key),
        }
        self.prefs.save(&self.path)
    }
}

/// In-memory store for tests and storage-less sessions.
///
/// Clones share the same underlying values, so a test can re-open "storage"
/// the way a second app run would re-open the file.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: std::sync::Arc<parking_lot::Mutex<std::collections::HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// OS dark-mode signal via the `dark-light` crate
pub struct OsSystemTheme;

impl SystemTheme for OsSystemTheme {
    fn prefers_dark(&self) -> bool {
        matches!(dark_light::detect(), dark_light::Mode::Dark)
    }
}

/// Fixed signal for tests
pub struct FixedSystemTheme(pub bool);

impl SystemTheme for FixedSystemTheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_default() {
        let prefs = Preferences::default();
        assert!(prefs.theme.is_none());
    }

    #[test]
    fn test_default_path() {
        let path = Preferences::default_path();
        assert!(path.ends_with(".kukuverse/preferences.json"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = FilePreferenceStore::open(path.clone());
        assert!(store.get(THEME_KEY).is_none());

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        // A fresh store sees the persisted value
        let reopened = FilePreferenceStore::open(path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs").join("preferences.json");

        let mut store = FilePreferenceStore::open(path.clone());
        store.set(THEME_KEY, "light").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_file_store_rejects_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FilePreferenceStore::open(dir.path().join("preferences.json"));

        assert!(store.set("volume", "11").is_err());
        assert!(store.get("volume").is_none());
    }

    #[test]
    fn test_load_tolerates_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json at all").unwrap();

        let prefs = Preferences::load(&path);
        assert!(prefs.theme.is_none());
    }

    #[test]
    fn test_deserialization_with_missing_fields() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.theme.is_none());
    }

    #[test]
    fn test_memory_store_clones_share_values() {
        let mut store = MemoryStore::new();
        let view = store.clone();

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(view.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_fixed_system_theme() {
        assert!(FixedSystemTheme(true).prefers_dark());
        assert!(!FixedSystemTheme(false).prefers_dark());
    }
}
