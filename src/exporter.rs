//! The node stats collector
//!
//! `Exporter` owns the HTTP stats client and every metric instrument, and
//! implements the prometheus collector callbacks. Each scrape cycle runs
//! under one exclusive lock: reset all instruments, fetch, decode, remap,
//! snapshot. The `up` gauge reflects whether the node answered; a decode
//! problem leaves it at 1 since the node itself was reachable.

use parking_lot::Mutex;
use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Gauge, Opts};
use tracing::{error, warn};

use crate::config::ExporterConfig;
use crate::metrics::{Instruments, NAMESPACE};
use crate::stats::{NodeStats, StatsClient};
use crate::utils::Result;

/// Prometheus collector for one Elasticsearch node
pub struct Exporter {
    client: StatsClient,
    instruments: Instruments,
    up: Gauge,
    cycle: Mutex<()>,
}

impl Exporter {
    /// Build the exporter from validated configuration
    pub fn new(config: &ExporterConfig) -> Result<Self> {
        let client = StatsClient::new(&config.es_uri, config.timeout)?;

        let up_opts = Opts::new("up", "Was the Elasticsearch instance query successful?")
            .namespace(NAMESPACE);
        let up = Gauge::with_opts(up_opts)?;

        Ok(Self {
            client,
            instruments: Instruments::build(),
            up,
            cycle: Mutex::new(()),
        })
    }

    /// Full stats URL this exporter scrapes
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Run one fetch-decode-remap pass and set `up` accordingly
    fn scrape(&self) {
        match self.client.fetch() {
            Ok(stats) => {
                self.up.set(1.0);
                if stats.nodes.len() != 1 {
                    warn!(
                        "Unexpected number of nodes in response: {}",
                        stats.nodes.len()
                    );
                }
                for node in stats.nodes.values() {
                    self.record_node(&stats.cluster_name, node);
                }
            }
            Err(err) => {
                self.up
                    .set(if err.target_reachable() { 1.0 } else { 0.0 });
                error!("Node stats scrape failed: {}", err);
            }
        }
    }

    /// Remap one node's fields into the instruments.
    ///
    /// Invoked once per node entry; with more than one entry each write
    /// overwrites the previous node's value (last node wins).
    fn record_node(&self, cluster: &str, node: &NodeStats) {
        let m = &self.instruments;

        // GC runs per collector
        for (name, gc) in &node.jvm.gc.collectors {
            m.set_counter_with(
                "jvm_gc_collections",
                cluster,
                name,
                gc.collection_count as f64,
            );
            m.set_counter_with(
                "jvm_gc_collections_time_ms",
                cluster,
                name,
                gc.collection_time_in_millis as f64,
            );
        }

        // Circuit breakers
        for (name, breaker) in &node.breakers {
            m.set_gauge_with(
                "breakers_estimated_size_bytes",
                cluster,
                name,
                breaker.estimated_size_in_bytes as f64,
            );
            m.set_gauge_with(
                "breakers_limit_size_bytes",
                cluster,
                name,
                breaker.limit_size_in_bytes as f64,
            );
        }

        // JVM memory
        let mem = &node.jvm.mem;
        m.set_gauge(
            "jvm_mem_heap_committed_bytes",
            cluster,
            mem.heap_committed_in_bytes as f64,
        );
        m.set_gauge("jvm_mem_heap_used_bytes", cluster, mem.heap_used_in_bytes as f64);
        m.set_gauge("jvm_mem_heap_max_bytes", cluster, mem.heap_max_in_bytes as f64);
        m.set_gauge(
            "jvm_mem_non_heap_committed_bytes",
            cluster,
            mem.non_heap_committed_in_bytes as f64,
        );
        m.set_gauge(
            "jvm_mem_non_heap_used_bytes",
            cluster,
            mem.non_heap_used_in_bytes as f64,
        );

        // Indices caches, documents, storage
        let indices = &node.indices;
        m.set_gauge(
            "indices_fielddata_memory_size_bytes",
            cluster,
            indices.fielddata.memory_size_in_bytes as f64,
        );
        m.set_counter(
            "indices_fielddata_evictions",
            cluster,
            indices.fielddata.evictions as f64,
        );
        m.set_gauge(
            "indices_filter_cache_memory_size_bytes",
            cluster,
            indices.filter_cache.memory_size_in_bytes as f64,
        );
        m.set_counter(
            "indices_filter_cache_evictions",
            cluster,
            indices.filter_cache.evictions as f64,
        );
        m.set_gauge("indices_docs", cluster, indices.docs.count as f64);
        m.set_gauge("indices_docs_deleted", cluster, indices.docs.deleted as f64);
        m.set_gauge(
            "indices_segments_memory_bytes",
            cluster,
            indices.segments.memory_in_bytes as f64,
        );
        m.set_gauge(
            "indices_store_size_bytes",
            cluster,
            indices.store.size_in_bytes as f64,
        );
        m.set_counter(
            "indices_store_throttle_time_ms_total",
            cluster,
            indices.store.throttle_time_in_millis as f64,
        );

        // Flush, indexing, merges
        m.set_counter("indices_flush_total", cluster, indices.flush.total as f64);
        m.set_counter(
            "indices_flush_time_ms_total",
            cluster,
            indices.flush.total_time_in_millis as f64,
        );
        m.set_counter(
            "indices_indexing_index_total",
            cluster,
            indices.indexing.index_total as f64,
        );
        m.set_counter(
            "indices_indexing_index_time_ms_total",
            cluster,
            indices.indexing.index_time_in_millis as f64,
        );
        m.set_counter("indices_merges_total", cluster, indices.merges.total as f64);
        m.set_counter(
            "indices_merges_total_docs_total",
            cluster,
            indices.merges.total_docs as f64,
        );
        m.set_counter(
            "indices_merges_total_size_bytes_total",
            cluster,
            indices.merges.total_size_in_bytes as f64,
        );
        m.set_counter(
            "indices_merges_total_time_ms_total",
            cluster,
            indices.merges.total_time_in_millis as f64,
        );

        // Transport
        let transport = &node.transport;
        m.set_counter("transport_rx_packets_total", cluster, transport.rx_count as f64);
        m.set_counter(
            "transport_rx_size_bytes_total",
            cluster,
            transport.rx_size_in_bytes as f64,
        );
        m.set_counter("transport_tx_packets_total", cluster, transport.tx_count as f64);
        m.set_counter(
            "transport_tx_size_bytes_total",
            cluster,
            transport.tx_size_in_bytes as f64,
        );
    }
}

impl Collector for Exporter {
    fn desc(&self) -> Vec<&Desc> {
        let mut descs = self.up.desc();
        descs.extend(self.instruments.descs());
        descs
    }

    fn collect(&self) -> Vec<MetricFamily> {
        // One exclusive lock wraps reset, fetch, remap, and the snapshot:
        // a concurrent trigger can never observe a half-reset cycle.
        let _cycle = self.cycle.lock();

        self.instruments.reset_all();
        self.scrape();

        let mut families = self.up.collect();
        families.extend(self.instruments.collect_counters());
        families.extend(self.instruments.collect_gauges());
        families
    }
}
