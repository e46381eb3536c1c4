//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Longest allowed freshness window: one week.
const MAX_EXPIRY_MINUTES: u64 = 7 * 24 * 60;

/// Largest allowed history cap.
const MAX_HISTORY_CAP: usize = 100;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `max_history` is 0 or exceeds 100
    /// - `cache_expiry_minutes` is 0 or exceeds one week
    /// - either path is empty
    /// - both paths point at the same file
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::Invalid { field: "max_history".into(), reason: "must be greater than 0".into() });
        }
        if self.max_history > MAX_HISTORY_CAP {
            return Err(ConfigError::Invalid {
                field: "max_history".into(),
                reason: format!("must not exceed {MAX_HISTORY_CAP}"),
            });
        }

        if self.cache_expiry_minutes == 0 {
            return Err(ConfigError::Invalid {
                field: "cache_expiry_minutes".into(),
                reason: "must be at least 1 minute".into(),
            });
        }
        if self.cache_expiry_minutes > MAX_EXPIRY_MINUTES {
            return Err(ConfigError::Invalid {
                field: "cache_expiry_minutes".into(),
                reason: format!("must not exceed one week ({MAX_EXPIRY_MINUTES} minutes)"),
            });
        }

        if self.cache_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "cache_path".into(), reason: "must not be empty".into() });
        }
        if self.history_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "history_path".into(), reason: "must not be empty".into() });
        }
        if self.cache_path == self.history_path {
            return Err(ConfigError::Invalid {
                field: "history_path".into(),
                reason: "must differ from cache_path".into(),
            });
        }

        Ok(())
    }
}
