//! elasticsearch-exporter - Prometheus exporter for Elasticsearch
//!
//! Polls a single node's stats endpoint and republishes a curated subset of
//! the payload as Prometheus metrics under the `elasticsearch` namespace.

use anyhow::Result;
use prometheus::Registry;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use elasticsearch_exporter::config::{CliArgs, ExporterConfig};
use elasticsearch_exporter::exporter::Exporter;
use elasticsearch_exporter::server::MetricsServer;
use elasticsearch_exporter::utils::ExporterError;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn print_banner(config: &ExporterConfig) {
    if config.quiet {
        return;
    }

    println!("elasticsearch-exporter v{}", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    println!("Target: {}", config.stats_url());
    println!(
        "Listen: {} Path: {}",
        config.listen_address, config.metrics_path
    );
    println!("Timeout: {}ms", config.timeout.as_millis());
    println!("====================================\n");
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse_args();

    // Setup logging
    setup_logging(args.verbose, args.quiet);

    // Build configuration
    let config = ExporterConfig::from_cli(&args).map_err(ExporterError::Config)?;

    // Print banner
    print_banner(&config);

    // Wire the exporter into a fresh registry
    let registry = Registry::new();
    let exporter = Exporter::new(&config)?;
    info!("Scraping {}", exporter.endpoint());
    registry.register(Box::new(exporter))?;

    // Serve the metrics endpoint until the process is stopped
    let server = MetricsServer::bind(config.listen_address, config.metrics_path.clone(), registry)?;
    info!(
        "Listening on http://{}{}",
        config.listen_address, config.metrics_path
    );
    server.serve()?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
