//! Typed, read-only access to the parts of the Sonarr REST API needed for
//! metrics export.
//!
//! Each call is a single authenticated GET with its own timeout; failures
//! are returned as [`FetchError`] and never retried.

mod client;
mod error;
pub mod models;
mod resource;

pub use client::{API_KEY_HEADER, DEFAULT_TIMEOUT, SonarrClient, SonarrClientBuilder};
pub use error::FetchError;
pub use models::Endpoint;
pub use resource::Resource;
