//! Decode target for the node stats payload
//!
//! Field names follow the Elasticsearch wire format. Every field defaults to
//! its zero value when absent, so a payload missing whole sections still
//! decodes; only malformed JSON or a type mismatch fails. Unknown fields are
//! ignored, since the endpoint returns far more than is remapped.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level payload returned by `/_nodes/_local/stats`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeStatsResponse {
    pub cluster_name: String,
    pub nodes: HashMap<String, NodeStats>,
}

/// Statistics for one node
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeStats {
    pub indices: IndicesStats,
    pub breakers: HashMap<String, BreakerStats>,
    pub jvm: JvmStats,
    pub transport: TransportStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IndicesStats {
    pub fielddata: CacheStats,
    pub filter_cache: CacheStats,
    pub docs: DocsStats,
    pub segments: SegmentsStats,
    pub store: StoreStats,
    pub flush: FlushStats,
    pub indexing: IndexingStats,
    pub merges: MergesStats,
}

/// Shared shape of the fielddata and filter cache sections
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CacheStats {
    pub memory_size_in_bytes: i64,
    pub evictions: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocsStats {
    pub count: i64,
    pub deleted: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SegmentsStats {
    pub memory_in_bytes: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreStats {
    pub size_in_bytes: i64,
    pub throttle_time_in_millis: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlushStats {
    pub total: i64,
    pub total_time_in_millis: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IndexingStats {
    pub index_total: i64,
    pub index_time_in_millis: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MergesStats {
    pub total: i64,
    pub total_docs: i64,
    pub total_size_in_bytes: i64,
    pub total_time_in_millis: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JvmStats {
    pub mem: JvmMemStats,
    pub gc: JvmGcStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JvmMemStats {
    pub heap_committed_in_bytes: i64,
    pub heap_used_in_bytes: i64,
    pub heap_max_in_bytes: i64,
    pub non_heap_committed_in_bytes: i64,
    pub non_heap_used_in_bytes: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JvmGcStats {
    pub collectors: HashMap<String, GcCollectorStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GcCollectorStats {
    pub collection_count: i64,
    pub collection_time_in_millis: i64,
}

/// One circuit breaker's current state
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BreakerStats {
    pub estimated_size_in_bytes: i64,
    pub limit_size_in_bytes: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransportStats {
    pub rx_count: i64,
    pub rx_size_in_bytes: i64,
    pub tx_count: i64,
    pub tx_size_in_bytes: i64,
}
