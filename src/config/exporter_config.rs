//! Exporter configuration derived from CLI arguments

use std::net::SocketAddr;
use std::time::Duration;

use crate::stats::node_stats_url;

use super::cli::CliArgs;

/// Complete exporter configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    // Web
    pub listen_address: SocketAddr,
    pub metrics_path: String,

    // Target node
    pub es_uri: String,
    pub timeout: Duration,

    // Output
    pub quiet: bool,
    pub verbose: bool,
}

impl ExporterConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        // Validate first
        args.validate()?;

        let listen_address: SocketAddr = args
            .listen_address
            .parse()
            .map_err(|_| format!("Invalid listen address: {}", args.listen_address))?;

        // The URI is kept as a string; parse once here to reject garbage at
        // startup instead of on the first scrape.
        reqwest::Url::parse(&args.es_uri)
            .map_err(|e| format!("Invalid Elasticsearch URI {}: {}", args.es_uri, e))?;

        Ok(Self {
            listen_address,
            metrics_path: args.metrics_path.clone(),
            es_uri: args.es_uri.clone(),
            timeout: Duration::from_millis(args.es_timeout_ms),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Full stats URL derived from the configured base URI
    pub fn stats_url(&self) -> String {
        node_stats_url(&self.es_uri)
    }
}
