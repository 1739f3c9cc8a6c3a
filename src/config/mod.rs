//! Configuration loading and validation for the page bootstrap.
//!
//! Uses serde_yaml to load YAML configuration files with support for
//! environment variable overrides.

mod app;
mod devserver;
mod error;
mod loader;

pub use app::AppConfig;
pub use devserver::DevServerConfig;
pub use error::ConfigError;
pub use loader::{FallbackConfig, LoaderConfig};

use serde::Deserialize;
use std::{env, fs};

/// Root configuration structure.
///
/// Required sections: app. Optional sections: loader, devserver (both
/// fall back to their defaults when omitted).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// Bootstrap data loader settings (optional).
    #[serde(default)]
    pub loader: LoaderConfig,
    /// Local dev-server proxy settings (optional).
    #[serde(default)]
    pub devserver: DevServerConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then loads YAML config and applies overrides from environment
    /// variables: `APP_NAME` replaces `app.name` when set.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.load_overrides_from_env();
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides from environment variables.
    fn load_overrides_from_env(&mut self) {
        if let Ok(name) = env::var("APP_NAME") {
            self.app.name = name;
        }
    }

    /// Resolve config values that default to other config values.
    fn apply_defaults(&mut self) {
        // The fallback record reuses the application name unless the
        // config pins a different literal.
        if self.loader.fallback.app_name.is_none() {
            self.loader.fallback.app_name = Some(self.app.name.clone());
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.app.env.is_empty() {
            return Err(ConfigError::Validation("app.env is required".into()));
        }

        if !self.loader.state_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "loader.state_path must start with '/'".into(),
            ));
        }

        if !self.devserver.path_prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "devserver.path_prefix must start with '/'".into(),
            ));
        }

        if self.devserver.port == 0 {
            return Err(ConfigError::Validation(
                "devserver.port must be positive".into(),
            ));
        }

        if self.devserver.backend_port_var.is_empty() {
            return Err(ConfigError::Validation(
                "devserver.backend_port_var is required".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
