//! Configuration file support for the inventory manager.
//!
//! Settings are stored as JSON: in the platform config directory on native builds
//! and in `localStorage` in the browser. Inventory items themselves are never persisted.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BLOB_ORIGIN;
use crate::model::Category;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to the log crate's Level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,
}

fn default_app_name() -> String {
    "Inventory Manager".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Item type preselected on a fresh add form
    #[serde(default)]
    pub default_category: Category,

    /// Origin embedded in handles issued by the in-memory blob provider
    #[serde(default = "default_blob_origin")]
    pub blob_origin: String,
}

fn default_blob_origin() -> String {
    DEFAULT_BLOB_ORIGIN.to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_category: Category::default(),
            blob_origin: default_blob_origin(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "inventory-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(
                config_dir
                    .join("inventory-manager")
                    .join(Self::default_filename()),
            )
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("inventory-manager")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from `path`, falling back to defaults if it is
    /// missing or unreadable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load configuration from the default path, or defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Save configuration to `path`, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save_to_path(&path)
    }

    /// LocalStorage key for WASM config persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "inventory-config";

    /// Load configuration from localStorage, or defaults (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Self {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            log::debug!("localStorage not available, using default config");
            return Self::default();
        };

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from localStorage");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::debug!("No config found in localStorage");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to localStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_local_storage(&self) -> Result<(), ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::StorageError("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::StorageError(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;

        let json = self.to_json()?;

        storage
            .set_item(Self::LOCALSTORAGE_KEY, &json)
            .map_err(|e| {
                ConfigError::StorageError(format!("Failed to save to localStorage: {:?}", e))
            })?;

        log::info!("Saved configuration to localStorage");
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let mut config = AppConfig::new();
        config.preferences.default_category = Category::Electronics;
        config.preferences.log_level = LogLevel::Debug;

        let json = config.to_json().unwrap();
        let loaded = AppConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded = AppConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(loaded.app_name, "Inventory Manager");
        assert_eq!(loaded.preferences, UserPreferences::default());

        let loaded =
            AppConfig::from_json(r#"{ "version": 1, "preferences": { "log_level": "warn" } }"#)
                .unwrap();
        assert_eq!(loaded.preferences.log_level, LogLevel::Warn);
        assert_eq!(loaded.preferences.default_category, Category::Shirt);
        assert_eq!(loaded.preferences.blob_origin, DEFAULT_BLOB_ORIGIN);
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        match AppConfig::from_json(&json) {
            Err(ConfigError::VersionTooNew {
                file_version,
                supported_version,
            }) => {
                assert_eq!(file_version, CONFIG_VERSION + 1);
                assert_eq!(supported_version, CONFIG_VERSION);
            }
            other => panic!("expected VersionTooNew, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_and_load_path() {
        let dir = std::env::temp_dir().join(format!(
            "inventory-config-test-{}",
            std::process::id()
        ));
        let path = dir.join("nested").join(AppConfig::default_filename());

        let mut config = AppConfig::new();
        config.preferences.blob_origin = "shop.test".to_string();
        config.save_to_path(&path).unwrap();

        assert_eq!(AppConfig::load_or_default(&path), config);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_default_path_is_app_scoped() {
        if let Some(path) = AppConfig::default_path() {
            assert!(path.ends_with("inventory-manager/inventory-config.json"));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_saved_preferences_reload() {
        let path = std::env::temp_dir()
            .join(format!("inventory-prefs-test-{}", std::process::id()))
            .join(AppConfig::default_filename());

        let mut config = AppConfig::load_or_default(&path);
        config.preferences.default_category = Category::Electronics;
        config.save_to_path(&path).unwrap();

        let reloaded = AppConfig::load_or_default(&path);
        assert_eq!(reloaded.preferences.default_category, Category::Electronics);
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("inventory-config-does-not-exist.json");
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }
}
