//! Logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log filter directive, used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "sonarr_exporter=info,sonarr_api=info,tower_http=info";

/// Build the filter for the given verbosity flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("sonarr_exporter=debug,sonarr_api=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(verbose: bool, quiet: bool) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt::layer().with_target(verbose))
        .init();
}
