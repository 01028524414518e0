use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use sonarr_api::SonarrClient;
use tracing::{error, info};

use sonarr_exporter::api::{AppState, ExporterServer, ServerConfig};
use sonarr_exporter::cli::Args;
use sonarr_exporter::{Result, SonarrCollector, UpstreamConfig, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Must succeed before anything is bound.
    let upstream = UpstreamConfig::load(&args.config_file)?;
    info!(config_file = %args.config_file.display(), sonarr_url = %upstream.sonarr_url, "Loaded configuration");

    let client = SonarrClient::new(upstream.sonarr_url, upstream.api_key)?;
    let collector = Arc::new(SonarrCollector::new(client));

    let server_config = ServerConfig {
        bind_address: args.bind_address,
        port: args.port,
    };
    let server = ExporterServer::new(server_config, AppState::new(collector));

    let cancel_token = server.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C");
            cancel_token.cancel();
        }
    });

    server.run().await
}
