//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (NIMBUS_*)
//! 2. TOML config file (if NIMBUS_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cache::CacheConfig;
use crate::history::HistoryConfig;
use crate::storage::FileStore;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (NIMBUS_*)
/// 2. TOML config file (if NIMBUS_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the cached weather response document.
    ///
    /// Set via NIMBUS_CACHE_PATH environment variable.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Minutes a cached response stays fresh.
    ///
    /// Set via NIMBUS_CACHE_EXPIRY_MINUTES environment variable.
    #[serde(default = "default_cache_expiry_minutes")]
    pub cache_expiry_minutes: u64,

    /// Path to the search history document.
    ///
    /// Set via NIMBUS_HISTORY_PATH environment variable.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,

    /// Maximum number of remembered search terms.
    ///
    /// Set via NIMBUS_MAX_HISTORY environment variable.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

const DEFAULT_CACHE_PATH: &str = "weather_cache.json";
const DEFAULT_HISTORY_PATH: &str = "search_history.json";

fn default_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_PATH)
}

fn default_cache_expiry_minutes() -> u64 {
    CacheConfig::DEFAULT_EXPIRY_MINUTES
}

fn default_history_path() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_PATH)
}

fn default_max_history() -> usize {
    HistoryConfig::DEFAULT_MAX_ENTRIES
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            cache_expiry_minutes: default_cache_expiry_minutes(),
            history_path: default_history_path(),
            max_history: default_max_history(),
        }
    }
}

impl AppConfig {
    /// Freshness window as Duration.
    pub fn cache_expiry(&self) -> Duration {
        Duration::from_secs(self.cache_expiry_minutes * 60)
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig { expiry: self.cache_expiry() }
    }

    pub fn history_config(&self) -> HistoryConfig {
        HistoryConfig { max_entries: self.max_history }
    }

    /// File store for the cached response at `cache_path`.
    pub fn cache_store(&self) -> FileStore {
        FileStore::new(&self.cache_path)
    }

    /// File store for the search history at `history_path`.
    pub fn history_store(&self) -> FileStore {
        FileStore::new(&self.history_path)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `NIMBUS_`
    /// 2. TOML file from `NIMBUS_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("NIMBUS_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("NIMBUS_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into()),
        );

        Self::from_figment(figment)
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
