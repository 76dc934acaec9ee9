//! elasticsearch-exporter library
//!
//! Prometheus exporter for a single Elasticsearch node's statistics.

pub mod config;
pub mod exporter;
pub mod metrics;
pub mod server;
pub mod stats;
pub mod utils;
