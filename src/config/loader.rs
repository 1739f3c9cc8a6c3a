//! Bootstrap data loader configuration.

use serde::Deserialize;

/// Path the loader fetches initial render data from.
const DEFAULT_STATE_PATH: &str = "/api/state";

/// Version reported when the upstream fetch fails.
const DEFAULT_APP_VERSION: &str = "0.0.0";

/// Settings for the bootstrap data loader.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Path fetched on every page request.
    pub state_path: String,
    /// Metadata record served when the upstream fetch fails.
    pub fallback: FallbackConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            state_path: DEFAULT_STATE_PATH.to_string(),
            fallback: FallbackConfig::default(),
        }
    }
}

/// The fixed metadata record substituted when loading fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Resolved from `app.name` when not set explicitly.
    pub app_name: Option<String>,
    pub app_version: String,
    pub app_description: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            app_version: DEFAULT_APP_VERSION.to_string(),
            app_description: String::new(),
        }
    }
}
