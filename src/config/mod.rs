//! Configuration module

pub mod cli;
pub mod exporter_config;

pub use cli::CliArgs;
pub use exporter_config::ExporterConfig;
