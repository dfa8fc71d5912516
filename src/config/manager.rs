//! Configuration manager for loading and saving the host configuration
//!
//! This module resolves the eyefilter home directory and loads `config.json`
//! from it. A missing file is written out with defaults on first run; an
//! unreadable one is ignored in favour of defaults.

use crate::config::models::AppConfig;
use crate::error::{EyeFilterError, Result, StringError};
use directories::ProjectDirs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable overriding the home directory
pub const HOME_ENV_VAR: &str = "EYEFILTER_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the eyefilter home directory
    ///
    /// Uses `EYEFILTER_HOME` when set, otherwise the platform config directory,
    /// otherwise the current directory.
    pub fn get_home_dir() -> PathBuf {
        if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
            return PathBuf::from(home);
        }

        ProjectDirs::from("", "", "eyefilter")
            .map_or_else(|| PathBuf::from("."), |dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_home_dir().join("config.json")
    }

    /// Ensure the home directory exists
    pub fn ensure_home_dir() -> Result<PathBuf> {
        let home = Self::get_home_dir();
        std::fs::create_dir_all(&home)?;
        Ok(home)
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, the defaults are written to it
    /// and returned. A corrupt file is left alone and defaults are returned.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, writing defaults");
            let config = AppConfig::default();
            if let Err(e) = Self::save(&config) {
                warn!("Failed to write default configuration: {}", e);
            }
            return Ok(config);
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_path = Self::get_config_path();
        let config_dir = config_path
            .parent()
            .ok_or_else(|| EyeFilterError::ConfigError(StringError::new("Invalid config path")))?;
        std::fs::create_dir_all(config_dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(&config_path)
            .map_err(|e| EyeFilterError::ConfigError(Box::new(e)))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{HomeGuard, create_test_dir};

    #[test]
    fn test_config_path_uses_home_override() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);

        let path = ConfigManager::get_config_path();
        assert_eq!(path, temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);

        let config = ConfigManager::load().unwrap();
        assert_eq!(config, AppConfig::default());

        let written: AppConfig = serde_json::from_str(
            &std::fs::read_to_string(temp_dir.path().join("config.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(written, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);

        let config = AppConfig {
            stylesheet_file: PathBuf::from("userContent.css"),
            ..AppConfig::default()
        };
        ConfigManager::save(&config).unwrap();

        let loaded = ConfigManager::load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_corrupt_config_uses_defaults() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);
        std::fs::write(temp_dir.path().join("config.json"), "[1, 2").unwrap();

        let config = ConfigManager::load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("config.json")).unwrap(),
            "[1, 2"
        );
    }

    #[test]
    fn test_ensure_home_dir_creates_directory() {
        let temp_dir = create_test_dir();
        let nested = temp_dir.path().join("a").join("b");
        let _guard = HomeGuard::with_path(&nested);

        let home = ConfigManager::ensure_home_dir().unwrap();
        assert_eq!(home, nested);
        assert!(nested.is_dir());
    }
}
