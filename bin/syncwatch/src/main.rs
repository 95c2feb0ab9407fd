use std::{env, process, sync::Arc};

use clap::Parser;
use syncwatch::cli::{Cli, Commands, serve::ServeConfig};
use syncwatch_rpc_health::server::start;
use syncwatch_upstream::source::{SyncSource, UpstreamSyncSource};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Entry point for syncwatch. Initializes logging, parses CLI arguments and serves the health
/// check API until it fails or Ctrl-C is received.
fn main() {
    let cli = Cli::parse();

    // Set the default log level based on verbosity flag or RUST_LOG env var
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(cli.verbosity.directive()),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("unable to create tokio runtime");

    let result = runtime.block_on(async {
        match cli.command {
            Commands::Serve(config) => {
                tokio::select! {
                    result = run_server(*config) => result,
                    _ = tokio::signal::ctrl_c() => {
                        info!("Ctrl-C received, shutting down...");
                        Ok(())
                    }
                }
            }
        }
    });

    if let Err(err) = result {
        error!("syncwatch exited with an error: {err:?}");
        process::exit(1);
    }

    process::exit(0);
}

/// Builds the upstream clients once and serves `/status` and `/height` with them.
pub async fn run_server(config: ServeConfig) -> anyhow::Result<()> {
    info!("starting up syncwatch...");

    let server_config = config.rpc_server_config();
    let health_config = config.health_check_config();
    let sync_source: Arc<dyn SyncSource> = Arc::new(UpstreamSyncSource::new(config.into())?);

    start(server_config, health_config, sync_source).await?;

    Ok(())
}
