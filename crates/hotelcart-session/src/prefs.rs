//! # Preference Storage
//!
//! The theme preference lives in a small JSON object on disk:
//!
//! ```json
//! { "theme": "dark" }
//! ```
//!
//! ## File Location
//! - `HOTELCART_PREFS_PATH` when set
//! - otherwise `<platform config dir>/preferences.json`
//!   - **Linux**: `~/.config/hotelcart/preferences.json`
//!   - **macOS**: `~/Library/Application Support/com.hotelcart.hotelcart/preferences.json`
//!   - **Windows**: `%APPDATA%\hotelcart\hotelcart\config\preferences.json`
//!
//! When no location can be determined the session keeps preferences in
//! memory for its lifetime.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hotelcart_core::theme::MemoryPreferences;
use hotelcart_core::PreferenceStore;
use thiserror::Error;
use tracing::warn;

use crate::config::SessionConfig;

const PREFS_FILE_NAME: &str = "preferences.json";

/// Preference file failures.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value preferences persisted as one JSON object.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFilePreferences { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for JsonFilePreferences {
    type Error = PreferenceError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        // an unreadable file is replaced rather than blocking the write
        let mut values = self.read_all().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Discarding unreadable preference file");
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// The preference backend a session runs with.
#[derive(Debug, Clone)]
pub enum SessionPreferences {
    Memory(MemoryPreferences),
    File(JsonFilePreferences),
}

impl SessionPreferences {
    /// Picks the file backend at the configured or platform location, or
    /// memory when neither is available.
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.prefs_path.clone().or_else(default_prefs_path) {
            Some(path) => SessionPreferences::File(JsonFilePreferences::new(path)),
            None => {
                warn!("No config directory available, theme preference will not persist");
                SessionPreferences::Memory(MemoryPreferences::new())
            }
        }
    }
}

impl PreferenceStore for SessionPreferences {
    type Error = PreferenceError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            SessionPreferences::Memory(prefs) => match prefs.load(key) {
                Ok(value) => Ok(value),
                Err(never) => match never {},
            },
            SessionPreferences::File(prefs) => prefs.load(key),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            SessionPreferences::Memory(prefs) => match prefs.save(key, value) {
                Ok(()) => Ok(()),
                Err(never) => match never {},
            },
            SessionPreferences::File(prefs) => prefs.save(key, value),
        }
    }
}

/// Platform-specific preference file path.
pub fn default_prefs_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "hotelcart", "hotelcart")
        .map(|dirs| dirs.config_dir().join(PREFS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use hotelcart_core::theme::THEME_STORAGE_KEY;

    use super::*;

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = JsonFilePreferences::new(dir.path().join("prefs.json"));
        assert_eq!(prefs.load(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_save_then_load_from_fresh_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = JsonFilePreferences::new(&path);
        prefs.save(THEME_STORAGE_KEY, "dark").unwrap();

        let reopened = JsonFilePreferences::new(&path);
        assert_eq!(reopened.load(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_save_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{ "locale": "en-GB" }"#).unwrap();

        let mut prefs = JsonFilePreferences::new(&path);
        prefs.save(THEME_STORAGE_KEY, "light").unwrap();

        assert_eq!(prefs.load("locale").unwrap().as_deref(), Some("en-GB"));
        assert_eq!(prefs.load(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_file_errors_on_load_and_is_replaced_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let mut prefs = JsonFilePreferences::new(&path);
        assert!(matches!(prefs.load(THEME_STORAGE_KEY), Err(PreferenceError::Json(_))));

        prefs.save(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(prefs.load(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_configured_path_selects_file_backend() {
        let config = SessionConfig {
            prefs_path: Some(PathBuf::from("/tmp/hotelcart-test/prefs.json")),
            ..SessionConfig::default()
        };
        assert!(matches!(
            SessionPreferences::from_config(&config),
            SessionPreferences::File(_)
        ));
    }
}
