//! Node stats fetching and decoding
//!
//! This module provides:
//! - The serde decode target for the node stats payload
//! - The blocking HTTP client bound to one node's stats endpoint

pub mod client;
pub mod model;

pub use client::{node_stats_url, StatsClient, NODE_STATS_PATH};
pub use model::{
    BreakerStats, CacheStats, DocsStats, FlushStats, GcCollectorStats, IndexingStats,
    IndicesStats, JvmGcStats, JvmMemStats, JvmStats, MergesStats, NodeStats, NodeStatsResponse,
    SegmentsStats, StoreStats, TransportStats,
};
