use thiserror::Error;

use crate::Resource;

/// Failure to obtain a decoded resource from the upstream API.
///
/// Every variant means "no data" for the resource in question; none of them
/// is fatal to the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error fetching {resource}: {source}")]
    Http {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} fetching {resource}")]
    Status {
        resource: Resource,
        status: reqwest::StatusCode,
    },
    #[error("invalid json for {resource}: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The resource whose fetch failed.
    pub fn resource(&self) -> Resource {
        match self {
            Self::Http { resource, .. }
            | Self::Status { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }

    /// Whether the request ran into the per-call timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http { source, .. } if source.is_timeout())
    }
}
