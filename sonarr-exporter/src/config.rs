//! Upstream configuration.
//!
//! Read once at startup from a JSON file and handed to the collector; there
//! is no process-wide configuration state.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Connection details for the Sonarr instance.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamConfig {
    /// API key sent as `X-Api-Key`.
    pub api_key: String,
    /// Base URL of the API, e.g. `http://localhost:8989/api`.
    pub sonarr_url: String,
}

// The API key stays out of logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &"<redacted>")
            .field("sonarr_url", &self.sonarr_url)
            .finish()
    }
}

impl UpstreamConfig {
    pub fn new(sonarr_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            sonarr_url: sonarr_url.into(),
        }
    }

    /// Load and validate the configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check that `sonarr_url` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.sonarr_url.clone(),
            reason,
        };

        let url = Url::parse(&self.sonarr_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }
}
