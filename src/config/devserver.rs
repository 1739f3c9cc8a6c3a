//! Local dev-server proxy configuration.

use serde::Deserialize;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PATH_PREFIX: &str = "/api";
const DEFAULT_BACKEND_HOST: &str = "127.0.0.1";
const DEFAULT_BACKEND_PORT: &str = "5000";
const DEFAULT_BACKEND_PORT_VAR: &str = "BACKEND_PORT";

/// Settings for the local dev-server proxy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Port the dev server itself listens on.
    pub port: u16,
    /// Path prefix forwarded to the backend.
    pub path_prefix: String,
    /// Backend host the prefix is proxied to.
    pub backend_host: String,
    /// Backend port used when the environment variable is not set.
    ///
    /// Kept as a string: the value is substituted into the target origin
    /// as-is, exactly like an environment-supplied one.
    pub backend_port: String,
    /// Environment variable that overrides the backend port.
    pub backend_port_var: String,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            backend_host: DEFAULT_BACKEND_HOST.to_string(),
            backend_port: DEFAULT_BACKEND_PORT.to_string(),
            backend_port_var: DEFAULT_BACKEND_PORT_VAR.to_string(),
        }
    }
}
