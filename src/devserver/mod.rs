//! Dev-server proxy selection.
//!
//! Computes the local development routing configuration once at
//! startup: the port the dev server listens on and the backend origin
//! API requests are forwarded to.

use std::collections::HashMap;
use std::env;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DevServerConfig;

/// Build plugins the computed settings are merged with.
const PLUGINS: [&str; 2] = ["sveltekit", "tailwindcss"];

/// Routing configuration consumed by the dev server for the duration
/// of its run.
///
/// The target origin is not validated: a malformed configured or
/// environment-supplied value propagates into a malformed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxySettings {
    /// Port the dev server listens on.
    pub port: u16,
    /// Maps a path prefix to the backend origin it is forwarded to.
    pub proxy: HashMap<String, String>,
}

/// The full object handed to the bundler pipeline: the fixed plugin
/// list merged with the computed server settings.
#[derive(Debug, Clone, Serialize)]
pub struct BundlerConfig {
    pub plugins: Vec<String>,
    pub server: ProxySettings,
}

/// Startup-time selector for the dev proxy target.
///
/// The backend port is read from the configured environment variable
/// once at construction; the selector is immutable afterwards.
pub struct ProxySelector {
    config: DevServerConfig,
    backend_port: String,
}

impl ProxySelector {
    pub fn new(config: DevServerConfig) -> Self {
        let backend_port = match env::var(&config.backend_port_var) {
            Ok(value) => {
                debug!(
                    var = %config.backend_port_var,
                    value = %value,
                    "Backend port resolved from environment"
                );
                value
            }
            Err(_) => {
                warn!(
                    var = %config.backend_port_var,
                    default = %config.backend_port,
                    "Backend port variable not set, using configured default"
                );
                config.backend_port.clone()
            }
        };

        Self {
            config,
            backend_port,
        }
    }

    /// The backend origin API requests are forwarded to.
    pub fn target(&self) -> String {
        format!("http://{}:{}", self.config.backend_host, self.backend_port)
    }

    /// Computes the routing configuration for the given mode.
    pub fn settings(&self, mode: &str) -> ProxySettings {
        let target = self.target();

        debug!(mode = %mode, target = %target, "Computing dev server settings");

        // Both branches produce the same configuration. The divergence
        // point is kept until a distinct non-development behavior is
        // actually decided.
        if mode == "development" {
            self.build_settings(target)
        } else {
            self.build_settings(target)
        }
    }

    /// The fixed plugin list merged with the settings for the mode.
    pub fn bundler_config(&self, mode: &str) -> BundlerConfig {
        BundlerConfig {
            plugins: PLUGINS.iter().map(|p| p.to_string()).collect(),
            server: self.settings(mode),
        }
    }

    fn build_settings(&self, target: String) -> ProxySettings {
        let mut proxy = HashMap::new();
        proxy.insert(self.config.path_prefix.clone(), target);

        ProxySettings {
            port: self.config.port,
            proxy,
        }
    }
}
