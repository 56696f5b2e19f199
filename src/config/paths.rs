//! Path management for Bachat
//!
//! Provides XDG-compliant path resolution for the expense file and the
//! settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `BACHAT_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/bachat-cli` or `~/.config/bachat-cli`
//! 3. Windows: `%APPDATA%\bachat-cli`

use std::path::PathBuf;

use crate::error::BachatError;

/// Manages all paths used by Bachat
#[derive(Debug, Clone)]
pub struct BachatPaths {
    /// Base directory for all Bachat data
    base_dir: PathBuf,
}

impl BachatPaths {
    /// Create a new BachatPaths instance
    ///
    /// Path resolution:
    /// 1. `BACHAT_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/bachat-cli` or `~/.config/bachat-cli`
    /// 3. Windows: `%APPDATA%\bachat-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BachatError> {
        let base_dir = if let Ok(custom) = std::env::var("BACHAT_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BachatPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/bachat-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the expense file
    ///
    /// An existing `expense.txt` dropped into the data directory loads
    /// unchanged.
    pub fn expense_file(&self) -> PathBuf {
        self.base_dir.join("expense.txt")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BachatError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BachatError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BachatError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| BachatError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("bachat-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BachatError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BachatError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("bachat-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BachatPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.expense_file(), temp_dir.path().join("expense.txt"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        // Set the env var
        env::set_var("BACHAT_CLI_DATA_DIR", custom_path);

        let paths = BachatPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        // Clean up
        env::remove_var("BACHAT_CLI_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BachatPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
