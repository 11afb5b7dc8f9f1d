// Configuration module

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Well-known environment variables (highest)
    /// 2. `CAMLENS_*` environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: CAMLENS_)
            .add_source(Environment::with_prefix("CAMLENS").separator("__"))
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        config.apply_well_known_env();
        Ok(config)
    }

    /// Apply the environment names the deployment contract promises
    /// regardless of the `CAMLENS_` prefix scheme.
    fn apply_well_known_env(&mut self) {
        if let Ok(key) = std::env::var("SILICONFLOW_API_KEY") {
            self.providers.siliconflow_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("STEPFUN_API_KEY") {
            self.providers.stepfun_api_key = Some(key);
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".camlens")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
