//! Prometheus exporter for Sonarr.
//!
//! On every scrape of `/metrics` the exporter polls the Sonarr API once per
//! resource, translates the responses into metric samples and returns them in
//! the Prometheus text format. Upstream failures never fail a scrape; they
//! show up as zero or missing samples.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;

pub use config::UpstreamConfig;
pub use error::{ConfigError, Error, Result};
pub use metrics::SonarrCollector;
