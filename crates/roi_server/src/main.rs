//! ROI Server
//!
//! REST API server for invoice-automation ROI scenarios.

use clap::Parser;
use roi_server::config::{build_config, CliArgs as ConfigCliArgs};
use roi_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ROI Server - REST API for invoice-automation ROI scenarios
#[derive(Parser, Debug)]
#[command(name = "roi_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "ROI_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "ROI_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ROI_LOG_LEVEL")]
    log_level: Option<String>,

    /// SQLite database file for saved scenarios
    #[arg(long, value_name = "FILE", env = "ROI_DATABASE_PATH")]
    database: Option<PathBuf>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            database_path: args.database,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("ROI Server v{}", roi_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        database = %config.database_path.display(),
        cors_enabled = %config.cors_enabled,
        "Server configuration loaded"
    );

    let server = Server::new(config);
    tracing::info!(address = %server.bind_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
