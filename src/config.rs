//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\saavn-catalog\config.toml
//! - macOS: ~/Library/Application Support/saavn-catalog/config.toml
//! - Linux: ~/.config/saavn-catalog/config.toml
//!
//! A different file can be passed explicitly (`--config`). Missing keys
//! fall back to defaults, and so does a missing or unreadable file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{
    DEFAULT_ARTIST_SONG_COUNT, DEFAULT_BASE_URL, DEFAULT_PLAYLIST_LIMIT,
    DEFAULT_RECOMMENDATION_LIMIT, USER_AGENT,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream catalog settings
    pub catalog: CatalogConfig,

    /// Log output settings
    pub logging: LoggingConfig,
}

/// Upstream catalog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// `api.php` endpoint
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Page size for playlist lookups
    pub playlist_limit: u32,

    /// Feed size for recommendations
    pub recommendation_limit: u32,

    /// Top songs requested with artist lookups
    pub artist_song_count: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            playlist_limit: DEFAULT_PLAYLIST_LIMIT,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            artist_song_count: DEFAULT_ARTIST_SONG_COUNT,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this crate's targets: "error", "warn", "info", "debug", "trace".
    /// RUST_LOG overrides it.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("saavn-catalog"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from an explicit path
///
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to an explicit path
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[catalog]"));
        assert!(toml.contains("[logging]"));
        assert!(toml.contains("playlist_limit = 100"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[catalog]
playlist_limit = 25
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.catalog.playlist_limit, 25);
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.recommendation_limit, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog.base_url = "http://localhost:9000/api.php".to_string();
        config.logging.level = "debug".to_string();

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path);

        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog\nbase_url = ").unwrap();

        assert_eq!(load_from(&path), Config::default());
    }
}
