// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Legacy environment variable holding the API key.
pub const LEGACY_API_KEY_VAR: &str = "SECRET_KEY";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied by the caller)
    /// 2. Environment variables (`GEMINI_RELAY_SECTION__FIELD`)
    /// 3. Config file
    /// 4. Defaults (lowest)
    ///
    /// `SECRET_KEY` fills in the API key when nothing else set it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // An explicit --config path must exist; the default one may not
            .add_source(File::from(file_path).required(path.is_some()))
            .add_source(
                Environment::with_prefix("GEMINI_RELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        app_config.apply_legacy_api_key(std::env::var(LEGACY_API_KEY_VAR).ok());
        Ok(app_config)
    }

    /// Use `key` as the API key if none was configured.
    pub fn apply_legacy_api_key(&mut self, key: Option<String>) {
        if self.gemini.api_key.trim().is_empty() {
            if let Some(key) = key {
                self.gemini.api_key = key;
            }
        }
    }

    /// Reject configurations that cannot possibly reach Gemini.
    ///
    /// A missing key fails here, at startup, instead of as an upstream 4xx
    /// on the first call.
    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(RelayError::Config(format!(
                "Gemini API key is not set (use GEMINI_RELAY_GEMINI__API_KEY or {})",
                LEGACY_API_KEY_VAR
            )));
        }

        let base = &self.gemini.api_base_url;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(RelayError::Config(format!(
                "gemini.api_base_url must be an http(s) URL, got {}",
                base
            )));
        }

        if self.gemini.model.trim().is_empty() {
            return Err(RelayError::Config("gemini.model must not be empty".to_string()));
        }

        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gemini-relay")
            .join("config.toml")
    }
}
