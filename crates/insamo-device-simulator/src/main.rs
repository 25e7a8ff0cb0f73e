//! CLI entry point for the INSAMO device simulator.

use anyhow::Result;
use clap::Parser;
use insamo_device_simulator::{run_simulation, HttpPublisher, SimulatorConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "insamo-device-simulator")]
#[command(about = "Feeds synthetic sensor readings to an INSAMO backend")]
#[command(version)]
struct Cli {
    /// Ingestion API base URL
    #[arg(short, long, default_value = "http://localhost:8000/api")]
    server: String,

    /// Device code to simulate (repeatable); class follows the code prefix
    /// (SIGMA-*, FLOWS-*, LANDSLIDE-*)
    #[arg(short, long = "device")]
    devices: Vec<String>,

    /// Milliseconds between ticks for every device
    #[arg(short, long, default_value = "1000")]
    interval_ms: u64,

    /// Seconds before a publish attempt is abandoned
    #[arg(short, long, default_value = "5")]
    publish_timeout_secs: u64,

    /// Base seed for reproducible walks (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let defaults = SimulatorConfig::default();
    let config = SimulatorConfig {
        server_url: cli.server,
        devices: if cli.devices.is_empty() {
            defaults.devices
        } else {
            cli.devices
        },
        tick_interval: Duration::from_millis(cli.interval_ms),
        publish_timeout: Duration::from_secs(cli.publish_timeout_secs),
        seed: cli.seed,
    };

    let publisher = Arc::new(HttpPublisher::new(&config.server_url, config.publish_timeout)?);

    // Cancel every device loop on SIGINT or SIGTERM.
    let shutdown = CancellationToken::new();
    let shutdown_for_handler = shutdown.clone();
    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("SIGINT received, stopping device loops...");
            }
            _ = terminate => {
                info!("SIGTERM received, stopping device loops...");
            }
        }

        shutdown_for_handler.cancel();
    });

    let summary = run_simulation(config, publisher, shutdown).await?;

    info!(
        published = summary.published,
        failed = summary.failed,
        "simulator exiting"
    );

    Ok(())
}
