//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::api::server::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT};

/// Prometheus exporter for Sonarr.
#[derive(Debug, Clone, Parser)]
#[command(name = "sonarr-exporter", version, about)]
pub struct Args {
    /// Port to serve metrics on
    #[arg(long, env = "SONARR_EXPORTER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind the metrics server to
    #[arg(long, env = "SONARR_EXPORTER_BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// Path to the JSON config file holding `apiKey` and `sonarrUrl`
    #[arg(
        long,
        visible_alias = "configFile",
        env = "SONARR_EXPORTER_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
