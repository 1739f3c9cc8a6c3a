//! Bootstrap data loading for server-rendered pages.
//!
//! One load per page request: fetch the application metadata from the
//! backend and hand it to the renderer, or substitute the configured
//! fallback record when the fetch fails.

mod fetch;
mod loader;

pub use fetch::{FetchError, FetchResponse, HttpFetcher, StateFetcher};
pub use loader::{LoadOutcome, Loader};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::FallbackConfig;

/// Bootstrap load failure. Never escapes the loader: every variant is
/// converted into the fallback outcome before the caller sees it.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The fetch itself failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The body did not parse as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed as JSON but is not an object.
    #[error("upstream body is not a JSON object")]
    NotAnObject,
}

/// Metadata handed to the page renderer.
///
/// On the primary path this is whatever JSON object the API supplied,
/// verbatim. On the fallback path exactly app_name, app_version and
/// app_description are present. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AppMetadata(Map<String, Value>);

impl AppMetadata {
    /// Wraps a JSON object received from the API, unmodified.
    pub fn from_object(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds the fixed fallback record from config.
    pub fn fallback(config: &FallbackConfig) -> Self {
        let mut fields = Map::new();
        fields.insert(
            "app_name".to_string(),
            Value::String(config.app_name.clone().unwrap_or_default()),
        );
        fields.insert(
            "app_version".to_string(),
            Value::String(config.app_version.clone()),
        );
        fields.insert(
            "app_description".to_string(),
            Value::String(config.app_description.clone()),
        );
        Self(fields)
    }

    pub fn app_name(&self) -> Option<&str> {
        self.field_str("app_name")
    }

    pub fn app_version(&self) -> Option<&str> {
        self.field_str("app_version")
    }

    pub fn app_description(&self) -> Option<&str> {
        self.field_str("app_description")
    }

    /// All fields, as received.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn field_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
