//! Debug binary that fetches one node stats payload and prints it
//!
//! Usage: dump_stats [es-uri] [timeout-ms]
//!
//! Fetches the local-node stats endpoint once and prints the decoded values
//! grouped the way they are exported.

use std::env;
use std::time::Duration;

use elasticsearch_exporter::stats::StatsClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let base_uri = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("http://localhost:9200");
    let timeout_ms: u64 = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => 5000,
    };

    let client = StatsClient::new(base_uri, Duration::from_millis(timeout_ms))?;

    println!("=== Node Stats Dump ===\n");
    println!("Fetching {}...", client.endpoint());

    let stats = client.fetch()?;
    println!("Cluster: {}", stats.cluster_name);
    println!("Nodes returned: {}", stats.nodes.len());

    for (id, node) in &stats.nodes {
        println!("\n--- Node {} ---", id);

        println!(
            "JVM heap: {} used / {} committed / {} max",
            node.jvm.mem.heap_used_in_bytes,
            node.jvm.mem.heap_committed_in_bytes,
            node.jvm.mem.heap_max_in_bytes
        );
        println!(
            "JVM non-heap: {} used / {} committed",
            node.jvm.mem.non_heap_used_in_bytes, node.jvm.mem.non_heap_committed_in_bytes
        );

        for (name, gc) in &node.jvm.gc.collectors {
            println!(
                "GC {}: {} runs, {}ms",
                name, gc.collection_count, gc.collection_time_in_millis
            );
        }

        for (name, breaker) in &node.breakers {
            println!(
                "Breaker {}: {} estimated / {} limit",
                name, breaker.estimated_size_in_bytes, breaker.limit_size_in_bytes
            );
        }

        let indices = &node.indices;
        println!(
            "Docs: {} ({} deleted)",
            indices.docs.count, indices.docs.deleted
        );
        println!(
            "Store: {} bytes, throttle {}ms",
            indices.store.size_in_bytes, indices.store.throttle_time_in_millis
        );
        println!("Segments memory: {} bytes", indices.segments.memory_in_bytes);
        println!(
            "Fielddata: {} bytes, {} evictions",
            indices.fielddata.memory_size_in_bytes, indices.fielddata.evictions
        );
        println!(
            "Filter cache: {} bytes, {} evictions",
            indices.filter_cache.memory_size_in_bytes, indices.filter_cache.evictions
        );
        println!(
            "Flush: {} total, {}ms",
            indices.flush.total, indices.flush.total_time_in_millis
        );
        println!(
            "Indexing: {} ops, {}ms",
            indices.indexing.index_total, indices.indexing.index_time_in_millis
        );
        println!(
            "Merges: {} total, {} docs, {} bytes, {}ms",
            indices.merges.total,
            indices.merges.total_docs,
            indices.merges.total_size_in_bytes,
            indices.merges.total_time_in_millis
        );

        let transport = &node.transport;
        println!(
            "Transport: rx {} pkts / {} bytes, tx {} pkts / {} bytes",
            transport.rx_count,
            transport.rx_size_in_bytes,
            transport.tx_count,
            transport.tx_size_in_bytes
        );
    }

    println!("\n=== Complete ===");
    Ok(())
}
