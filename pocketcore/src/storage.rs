//! Preferences storage
//!
//! Window geometry, readout size and the default log filter live in a
//! small JSON file under the platform config directory. Calculator state
//! is never written here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub window_width: f32,
    pub window_height: f32,
    pub display_font_size: f32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            window_width: 260.0,
            window_height: 360.0,
            display_font_size: 36.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Preferences {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from `path`. A missing file is normal on first run and gives
    /// the defaults; any other failure is returned so the caller can report
    /// it once logging is up.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Config directory for an app, or `.` when the platform has none.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn preferences_path(app_name: &str) -> PathBuf {
    config_dir(app_name).join(PREFERENCES_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_or_default(&dir.path().join("nope.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);
        let prefs = Preferences {
            window_width: 300.0,
            log_filter: "pocketcalc=trace".to_string(),
            ..Preferences::default()
        };
        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, r#"{ "display_font_size": 48.0 }"#).unwrap();
        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.display_font_size, 48.0);
        assert_eq!(prefs.window_width, Preferences::default().window_width);
    }

    #[test]
    fn test_garbage_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Preferences::load_or_default(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_preferences_path_ends_with_file() {
        assert!(preferences_path("pocketcalc").ends_with(PREFERENCES_FILE));
    }
}
