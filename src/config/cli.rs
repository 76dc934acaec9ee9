//! Command-line argument parsing
//!
//! Flag names and defaults follow the conventional exporter surface: a web
//! listen address and metrics path, plus the target node URI and timeout.

use clap::Parser;

/// Prometheus exporter for Elasticsearch node statistics
#[derive(Parser, Debug, Clone)]
#[command(name = "elasticsearch-exporter")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Web Options =====
    /// Address to listen on for the metrics endpoint
    #[arg(long = "listen-address", default_value = "0.0.0.0:9108")]
    pub listen_address: String,

    /// Path under which to expose metrics
    #[arg(long = "metrics-path", default_value = "/metrics")]
    pub metrics_path: String,

    // ===== Elasticsearch Options =====
    /// HTTP API address of the Elasticsearch node to export stats for
    #[arg(long = "es-uri", default_value = "http://localhost:9200")]
    pub es_uri: String,

    /// Timeout in milliseconds for node stats requests
    #[arg(long = "es-timeout", default_value_t = 5000)]
    pub es_timeout_ms: u64,

    // ===== Output Options =====
    /// Quiet mode (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if !self.metrics_path.starts_with('/') {
            return Err("--metrics-path must start with '/'".to_string());
        }

        if self.es_timeout_ms == 0 {
            return Err("--es-timeout must be at least 1 millisecond".to_string());
        }

        if self.es_uri.is_empty() {
            return Err("--es-uri must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["test"]);
        assert_eq!(args.listen_address, "0.0.0.0:9108");
        assert_eq!(args.metrics_path, "/metrics");
        assert_eq!(args.es_uri, "http://localhost:9200");
        assert_eq!(args.es_timeout_ms, 5000);
    }

    #[test]
    fn test_validate_rejects_relative_metrics_path() {
        let args = CliArgs::parse_from(["test", "--metrics-path", "metrics"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let args = CliArgs::parse_from(["test", "--es-timeout", "0"]);
        assert!(args.validate().is_err());
    }
}
