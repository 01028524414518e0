//! Application-wide error types.

use std::path::PathBuf;

use thiserror::Error;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit status used when the configuration file cannot be loaded.
pub const CONFIG_EXIT_CODE: u8 = 3;

/// Failure to load the upstream configuration. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open config file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid sonarrUrl {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => CONFIG_EXIT_CODE,
            _ => 1,
        }
    }
}
