//! User settings for Bachat
//!
//! Manages user preferences persisted between sessions. Currently that is
//! the color theme; the expense data itself lives in the expense file, not
//! here.

use serde::{Deserialize, Serialize};

use super::paths::BachatPaths;
use crate::error::BachatError;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Dark grayscale theme (default, applied on first start)
    #[default]
    Dark,
    /// Light grayscale theme
    Light,
}

impl ThemeKind {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// User settings for Bachat
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Active color theme
    #[serde(default)]
    pub theme: ThemeKind,
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BachatPaths) -> Result<Self, BachatError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BachatError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BachatError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Default settings; the caller decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BachatPaths) -> Result<(), BachatError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BachatError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BachatError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeKind::Dark);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeKind::Dark.toggled(), ThemeKind::Light);
        assert_eq!(ThemeKind::Light.toggled(), ThemeKind::Dark);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BachatPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            theme: ThemeKind::Light,
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, ThemeKind::Light);
    }

    #[test]
    fn test_load_or_create_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BachatPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.theme, ThemeKind::Dark);
        assert!(!paths.settings_file().exists());
    }
}
