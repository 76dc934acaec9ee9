//! Error types for elasticsearch-exporter

use std::io;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Metric registration error: {0}")]
    Registry(#[from] prometheus::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failures local to one scrape cycle.
///
/// These are never propagated out of the collector: they decide the value of
/// the `up` gauge and are logged, then the cycle ends and the next trigger
/// retries from scratch.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Connect or timeout failure before any response arrived
    #[error("node stats request failed: {0}")]
    Unreachable(reqwest::Error),

    /// The connection succeeded but the body could not be read in time
    #[error("failed reading node stats body: {0}")]
    ReadBody(reqwest::Error),

    /// The body arrived but is not a node stats payload
    #[error("invalid node stats payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Whether the target node itself was reachable when the cycle failed
    pub fn target_reachable(&self) -> bool {
        matches!(self, ScrapeError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, ExporterError>;
