//! The bootstrap data loader.

use serde_json::Value;
use tracing::{error, info};

use super::{AppMetadata, LoadError, StateFetcher};
use crate::config::LoaderConfig;

/// Result of a bootstrap load. Failures degrade to the fallback record,
/// so the caller-visible data shape is the same either way; the reason
/// is preserved for observability.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Upstream answered; metadata is the response object verbatim.
    Loaded(AppMetadata),
    /// Upstream fetch failed; metadata is the configured fallback record.
    Fallback {
        metadata: AppMetadata,
        reason: LoadError,
    },
}

impl LoadOutcome {
    /// The metadata, regardless of which path produced it.
    pub fn into_metadata(self) -> AppMetadata {
        match self {
            Self::Loaded(metadata) => metadata,
            Self::Fallback { metadata, .. } => metadata,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Per-page-request loader for initial render data.
///
/// Holds no mutable state, so independent requests can load
/// concurrently.
pub struct Loader<F> {
    mode: String,
    config: LoaderConfig,
    fetcher: F,
}

impl<F: StateFetcher> Loader<F> {
    pub fn new(mode: impl Into<String>, config: LoaderConfig, fetcher: F) -> Self {
        Self {
            mode: mode.into(),
            config,
            fetcher,
        }
    }

    /// Fetches bootstrap metadata, substituting the configured fallback
    /// record on any failure. Never returns an error.
    pub async fn load(&self) -> LoadOutcome {
        info!(path = %self.config.state_path, "Loading bootstrap data");
        info!(mode = %self.mode, "Runtime mode");

        match self.try_load().await {
            Ok(metadata) => LoadOutcome::Loaded(metadata),
            Err(reason) => {
                error!(error = %reason, "Failed to load bootstrap data, serving fallback");
                LoadOutcome::Fallback {
                    metadata: AppMetadata::fallback(&self.config.fallback),
                    reason,
                }
            }
        }
    }

    async fn try_load(&self) -> Result<AppMetadata, LoadError> {
        let response = self.fetcher.get(&self.config.state_path).await?;

        if !response.is_success() {
            return Err(LoadError::Status(response.status));
        }

        match serde_json::from_slice(&response.body)? {
            Value::Object(fields) => Ok(AppMetadata::from_object(fields)),
            _ => Err(LoadError::NotAnObject),
        }
    }
}
