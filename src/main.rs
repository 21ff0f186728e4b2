use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;

use scada_mimic::elements::MemoryRegistry;
use scada_mimic::sources::{HttpProvider, DEFAULT_STATUS_URL};
use scada_mimic::{default_plant, RenderAdapter, ScanLoop, SnapshotDispatcher};

/// scada-mimic - headless SCADA mimic updater
#[derive(Parser, Debug, Clone)]
#[command(name = "scada-mimic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Status gateway endpoint
    #[arg(short = 'u', long = "url", default_value = DEFAULT_STATUS_URL)]
    url: String,

    /// Scan period in milliseconds
    #[arg(short = 'p', long = "period", value_name = "MS", default_value = "1000")]
    period_ms: u64,

    /// Per-request fetch timeout in milliseconds
    #[arg(long = "timeout", value_name = "MS", default_value = "5000")]
    timeout_ms: u64,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Allow RUST_LOG to override the CLI verbosity
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting scada-mimic v{}", env!("CARGO_PKG_VERSION"));
    info!("polling {} every {}ms", cli.url, cli.period_ms);

    let map = default_plant();
    let registry = Arc::new(MemoryRegistry::new());
    registry.seed(&map);

    let provider = HttpProvider::with_timeout(&cli.url, Duration::from_millis(cli.timeout_ms))?;
    let adapter = RenderAdapter::new(registry);
    let dispatcher = SnapshotDispatcher::new(map, adapter);

    ScanLoop::new(Arc::new(provider), dispatcher)
        .with_period(Duration::from_millis(cli.period_ms))
        .run()
        .await;

    Ok(())
}
