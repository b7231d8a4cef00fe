use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const API_URL_ENV: &str = "STOCKROOM_API_URL";
pub const TIMEOUT_ENV: &str = "STOCKROOM_TIMEOUT_SECS";
pub const LOG_LEVEL_ENV: &str = "STOCKROOM_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the product API, including the `/api` prefix
    pub api_base_url: String,

    /// Per-request timeout (in seconds)
    pub timeout_seconds: u64,

    /// Log level for the tracing subscriber (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001/api".to_string(),
            timeout_seconds: 15,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from `path`, writing the defaults there if it does not exist yet
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            Ok(config)
        } else {
            let default_config = Self::default();
            default_config.save_to(path)?;
            Ok(default_config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("stockroom").join("config.toml"))
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_seconds = secs,
                _ => warn!(value = %raw, "Ignoring invalid {}", TIMEOUT_ENV),
            }
        }

        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.log_level = level.trim().to_lowercase();
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(API_URL_ENV);
            std::env::remove_var(TIMEOUT_ENV);
            std::env::remove_var(LOG_LEVEL_ENV);
        }
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3001/api");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = \"https://inventory.example.com/api\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "https://inventory.example.com/api");
        assert_eq!(config.timeout_seconds, 15);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "timeout_seconds = \"soon\"").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var(API_URL_ENV, " http://10.0.0.2:3001/api ");
            std::env::set_var(TIMEOUT_ENV, "30");
            std::env::set_var(LOG_LEVEL_ENV, "DEBUG");
        }

        let mut config = AppConfig::default();
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.api_base_url, "http://10.0.0.2:3001/api");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_override_is_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(TIMEOUT_ENV, "0");
        }

        let mut config = AppConfig::default();
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.timeout_seconds, 15);
    }
}
