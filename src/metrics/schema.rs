//! Static declaration of every exported metric
//!
//! The full metric surface is fixed at compile time in four tables: scalar
//! gauges, scalar counters, vector counters (one series per GC collector),
//! and vector gauges (one series per circuit breaker). Scalar metrics carry
//! only the `cluster` label; vector metrics add one dimension label after it.

use std::collections::HashSet;

/// Namespace prefix applied to every exported metric name
pub const NAMESPACE: &str = "elasticsearch";

/// Label carried by every metric, always first
pub const CLUSTER_LABEL: &str = "cluster";

/// One exported metric: fixed name, help text, and optional dimension label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub name: &'static str,
    pub help: &'static str,
    pub dimension: Option<&'static str>,
}

impl MetricSpec {
    /// A metric labeled by cluster only
    pub const fn scalar(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            dimension: None,
        }
    }

    /// A metric labeled by cluster plus one dynamic dimension
    pub const fn vector(name: &'static str, help: &'static str, dimension: &'static str) -> Self {
        Self {
            name,
            help,
            dimension: Some(dimension),
        }
    }

    /// Label names in declaration order: cluster first, then the dimension
    pub fn label_names(&self) -> Vec<&'static str> {
        match self.dimension {
            Some(dim) => vec![CLUSTER_LABEL, dim],
            None => vec![CLUSTER_LABEL],
        }
    }

    /// Fully qualified name as it appears on the metrics endpoint
    pub fn fq_name(&self) -> String {
        format!("{}_{}", NAMESPACE, self.name)
    }
}

/// Gauges remapped from single payload fields
pub static SCALAR_GAUGES: &[MetricSpec] = &[
    MetricSpec::scalar(
        "indices_fielddata_memory_size_bytes",
        "Field data cache memory usage in bytes",
    ),
    MetricSpec::scalar(
        "indices_filter_cache_memory_size_bytes",
        "Filter cache memory usage in bytes",
    ),
    MetricSpec::scalar("indices_docs", "Count of documents on this node"),
    MetricSpec::scalar(
        "indices_docs_deleted",
        "Count of deleted documents on this node",
    ),
    MetricSpec::scalar(
        "indices_store_size_bytes",
        "Current size of stored index data in bytes",
    ),
    MetricSpec::scalar(
        "indices_segments_memory_bytes",
        "Current memory size of segments in bytes",
    ),
    MetricSpec::scalar(
        "jvm_mem_heap_committed_bytes",
        "JVM heap memory currently committed",
    ),
    MetricSpec::scalar("jvm_mem_heap_used_bytes", "JVM heap memory currently used"),
    MetricSpec::scalar("jvm_mem_heap_max_bytes", "JVM heap memory max"),
    MetricSpec::scalar(
        "jvm_mem_non_heap_committed_bytes",
        "JVM non-heap memory currently committed",
    ),
    MetricSpec::scalar(
        "jvm_mem_non_heap_used_bytes",
        "JVM non-heap memory currently used",
    ),
];

/// Counters remapped from single payload fields
pub static SCALAR_COUNTERS: &[MetricSpec] = &[
    MetricSpec::scalar("indices_fielddata_evictions", "Evictions from field data"),
    MetricSpec::scalar(
        "indices_filter_cache_evictions",
        "Evictions from filter cache",
    ),
    MetricSpec::scalar("indices_flush_total", "Total flushes"),
    MetricSpec::scalar(
        "indices_flush_time_ms_total",
        "Cumulative flush time in milliseconds",
    ),
    MetricSpec::scalar("transport_rx_packets_total", "Count of packets received"),
    MetricSpec::scalar(
        "transport_rx_size_bytes_total",
        "Total number of bytes received",
    ),
    MetricSpec::scalar("transport_tx_packets_total", "Count of packets sent"),
    MetricSpec::scalar("transport_tx_size_bytes_total", "Total number of bytes sent"),
    MetricSpec::scalar(
        "indices_store_throttle_time_ms_total",
        "Throttle time for index store in milliseconds",
    ),
    MetricSpec::scalar("indices_indexing_index_total", "Total index calls"),
    MetricSpec::scalar(
        "indices_indexing_index_time_ms_total",
        "Cumulative index time in milliseconds",
    ),
    MetricSpec::scalar("indices_merges_total", "Total merges"),
    MetricSpec::scalar("indices_merges_total_docs_total", "Cumulative docs merged"),
    MetricSpec::scalar(
        "indices_merges_total_size_bytes_total",
        "Total merge size in bytes",
    ),
    MetricSpec::scalar(
        "indices_merges_total_time_ms_total",
        "Total time spent merging in milliseconds",
    ),
];

/// Counters with one series per JVM GC collector
pub static VECTOR_COUNTERS: &[MetricSpec] = &[
    MetricSpec::vector("jvm_gc_collections", "Count of JVM GC runs", "collector"),
    MetricSpec::vector(
        "jvm_gc_collections_time_ms",
        "GC run time in milliseconds",
        "collector",
    ),
];

/// Gauges with one series per circuit breaker
pub static VECTOR_GAUGES: &[MetricSpec] = &[
    MetricSpec::vector(
        "breakers_estimated_size_bytes",
        "Estimated size in bytes of breaker",
        "breaker",
    ),
    MetricSpec::vector(
        "breakers_limit_size_bytes",
        "Limit size in bytes for breaker",
        "breaker",
    ),
];

/// All gauge specs, scalar and vector
pub fn gauge_specs() -> impl Iterator<Item = &'static MetricSpec> {
    SCALAR_GAUGES.iter().chain(VECTOR_GAUGES.iter())
}

/// All counter specs, scalar and vector
pub fn counter_specs() -> impl Iterator<Item = &'static MetricSpec> {
    SCALAR_COUNTERS.iter().chain(VECTOR_COUNTERS.iter())
}

/// Every spec across all four tables
pub fn all_specs() -> impl Iterator<Item = &'static MetricSpec> {
    gauge_specs().chain(counter_specs())
}

/// Panics if two table entries share a name. Called once at startup, before
/// any instrument is built; a duplicate is a programming error in the tables.
pub fn verify_unique_names() {
    let mut seen = HashSet::new();
    for spec in all_specs() {
        if !seen.insert(spec.name) {
            panic!("duplicate metric name in schema tables: {}", spec.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_unique() {
        let names: Vec<&str> = all_specs().map(|s| s.name).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        verify_unique_names();
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(SCALAR_GAUGES.len(), 11);
        assert_eq!(SCALAR_COUNTERS.len(), 15);
        assert_eq!(VECTOR_COUNTERS.len(), 2);
        assert_eq!(VECTOR_GAUGES.len(), 2);
    }

    #[test]
    fn test_cluster_label_first() {
        for spec in all_specs() {
            let labels = spec.label_names();
            assert_eq!(labels[0], CLUSTER_LABEL, "metric {}", spec.name);
        }
    }

    #[test]
    fn test_vector_specs_carry_dimension() {
        for spec in VECTOR_COUNTERS {
            assert_eq!(spec.dimension, Some("collector"));
            assert_eq!(spec.label_names(), vec!["cluster", "collector"]);
        }
        for spec in VECTOR_GAUGES {
            assert_eq!(spec.dimension, Some("breaker"));
            assert_eq!(spec.label_names(), vec!["cluster", "breaker"]);
        }
    }

    #[test]
    fn test_fq_name_carries_namespace() {
        let spec = MetricSpec::scalar("indices_docs", "Count of documents on this node");
        assert_eq!(spec.fq_name(), "elasticsearch_indices_docs");
    }
}
