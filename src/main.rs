//! Launch Dash server
//!
//! Run with: cargo run -- --data spacex_launch_dash.csv
//!
//! # Configuration
//!
//! Settings come from `--config`, else the first of
//! `~/.config/launch-dash/config.toml` and `./launch-dash.toml`, else
//! defaults. Environment variables override the file:
//! - `LAUNCH_DASH_DATA_PATH`: CSV file (default: spacex_launch_dash.csv)
//! - `LAUNCH_DASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCH_DASH_PORT`: Port to listen on (default: 8050)
//! - `LAUNCH_DASH_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCH_DASH_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log level entirely
//!
//! Command-line flags override everything.

use anyhow::Context;
use clap::Parser;
use launch_dash::api::{serve, AppState};
use launch_dash::config::{generate_default_config, Config, LoggingConfig};
use launch_dash::dataset::load_dataset;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard over historical launch records")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch records CSV (overrides config)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    if let Some(data) = cli.data {
        config.data.path = data;
    }
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting launch dashboard v{}", env!("CARGO_PKG_VERSION"));

    let (dataset, report) = load_dataset(&config.data.path)
        .with_context(|| format!("loading launch records from {}", config.data.path.display()))?;

    if report.rows_skipped > 0 {
        tracing::warn!(
            rows_skipped = report.rows_skipped,
            "Some launch rows could not be parsed and were skipped"
        );
    }
    if report.rows_missing_payload > 0 {
        tracing::info!(
            rows_missing_payload = report.rows_missing_payload,
            "Some launches have no payload mass and are left out of the scatter chart"
        );
    }
    if dataset.is_empty() {
        tracing::warn!("Launch dataset is empty; charts will have no data");
    }
    tracing::info!(
        records = dataset.len(),
        sites = dataset.sites().len(),
        "Launch dataset ready"
    );

    let state = AppState::new(dataset, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Launch dashboard stopped");
    Ok(())
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},tower_http=info", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
