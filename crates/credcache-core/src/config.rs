//! Cache configuration
//!
//! Loaded from `~/.credcache/credcache.toml` when present. The file only
//! tunes behaviour; credentials are never written to or read from disk.

use crate::cache::OverwritePolicy;
use crate::error::{CacheError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// ============================================================================
// Constants
// ============================================================================

/// Default number of queued client commands before senders wait
pub const DEFAULT_CLIENT_QUEUE_CAPACITY: usize = 64;

/// Environment variable that forces the initial mode
pub const ENV_TEMP_MODE: &str = "CREDCACHE_TEMP_MODE";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "credcache.toml";

/// Credcache data directory name
pub const CREDCACHE_DIR_NAME: &str = ".credcache";

/// Credential cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Start with the temporary set active (default: false).
    /// `CREDCACHE_TEMP_MODE` overrides whatever the file says.
    #[serde(default)]
    pub start_in_temp_mode: bool,

    /// Policy used by `put_default` (default: overwrite)
    #[serde(default)]
    pub default_policy: OverwritePolicy,

    /// Bounded queue size for `CredentialCacheClient` (default: 64)
    #[serde(default = "default_client_queue_capacity")]
    pub client_queue_capacity: usize,
}

/// Parses a boolean flag from the environment (`1|true` / `0|false`).
pub fn parse_env_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Returns the default client queue capacity.
pub fn default_client_queue_capacity() -> usize {
    DEFAULT_CLIENT_QUEUE_CAPACITY
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            start_in_temp_mode: false,
            default_policy: OverwritePolicy::default(),
            client_queue_capacity: default_client_queue_capacity(),
        }
    }
}

impl CacheConfig {
    /// Load from the default config file or use defaults
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load from `path`, falling back to defaults if it is missing or invalid
    ///
    /// Environment overrides apply either way.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => warn!("Failed to load cache config: {}", e),
            }
        }

        debug!(path = %path.display(), "Using default cache config");
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Load config from a file path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CacheError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML text, apply environment overrides, then validate
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| CacheError::Configuration(e.to_string()))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `CREDCACHE_TEMP_MODE` if it is set
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(ENV_TEMP_MODE) {
            self.apply_temp_mode_override(&value);
        }
    }

    fn apply_temp_mode_override(&mut self, value: &str) {
        match parse_env_flag(value) {
            Some(temp) => self.start_in_temp_mode = temp,
            None => warn!(var = ENV_TEMP_MODE, value = %value, "Ignoring unrecognized flag value"),
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.client_queue_capacity == 0 {
            return Err(CacheError::Configuration(
                "client_queue_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get config file path
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CREDCACHE_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests;
