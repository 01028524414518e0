use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::models::Endpoint;
use crate::{FetchError, Resource};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Read-only client for a single Sonarr instance.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SonarrClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl SonarrClient {
    /// Create a client with the default timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Self::builder(base_url, api_key).build()
    }

    pub fn builder(base_url: impl Into<String>, api_key: impl Into<String>) -> SonarrClientBuilder {
        SonarrClientBuilder {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for a resource.
    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    /// Issue a single GET for `T`'s endpoint and decode the body.
    ///
    /// A non-success status is reported without touching the body. There is
    /// no retry.
    pub async fn fetch<T: Endpoint>(&self) -> Result<T, FetchError> {
        let resource = T::RESOURCE;
        let url = self.url_for(resource);
        debug!(resource = resource.name(), url = %url, "Fetching upstream resource");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| FetchError::Http { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { resource, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Http { resource, source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { resource, source })
    }
}

/// Builder for [`SonarrClient`].
#[derive(Debug)]
pub struct SonarrClientBuilder {
    base_url: String,
    api_key: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl SonarrClientBuilder {
    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reuse an existing HTTP client instead of creating one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<SonarrClient, reqwest::Error> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(concat!("sonarr-api/", env!("CARGO_PKG_VERSION")))
                .build()?,
        };

        Ok(SonarrClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            timeout: self.timeout,
        })
    }
}
