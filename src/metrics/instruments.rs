//! Live metric instruments built from the schema tables
//!
//! One `GaugeVec`/`CounterVec` per schema entry, created once at startup and
//! mutated every scrape cycle. Label ordering is fixed here and nowhere else:
//! every setter takes the cluster value first, then the dimension value.

use std::collections::HashMap;

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{CounterVec, GaugeVec, Opts};

use super::schema::{self, NAMESPACE};

/// Instrument tables keyed by bare metric name
pub struct Instruments {
    gauges: HashMap<&'static str, GaugeVec>,
    counters: HashMap<&'static str, CounterVec>,
}

impl Instruments {
    /// Build one instrument per schema entry.
    ///
    /// Pure construction from the fixed tables; panics on a duplicate or
    /// otherwise invalid spec, which cannot happen outside a bad table edit.
    pub fn build() -> Self {
        schema::verify_unique_names();

        let mut gauges = HashMap::new();
        for spec in schema::gauge_specs() {
            let opts = Opts::new(spec.name, spec.help).namespace(NAMESPACE);
            let vec = GaugeVec::new(opts, &spec.label_names())
                .expect("Failed to create gauge from schema table");
            gauges.insert(spec.name, vec);
        }

        let mut counters = HashMap::new();
        for spec in schema::counter_specs() {
            let opts = Opts::new(spec.name, spec.help).namespace(NAMESPACE);
            let vec = CounterVec::new(opts, &spec.label_names())
                .expect("Failed to create counter from schema table");
            counters.insert(spec.name, vec);
        }

        Self { gauges, counters }
    }

    /// Static descriptors of every instrument, independent of fetched data
    pub fn descs(&self) -> Vec<&Desc> {
        let mut descs = Vec::new();
        for vec in self.counters.values() {
            descs.extend(vec.desc());
        }
        for vec in self.gauges.values() {
            descs.extend(vec.desc());
        }
        descs
    }

    /// Clear every instrument, dropping all label combinations observed in
    /// previous cycles. Label sets can change between cycles (breakers and GC
    /// collectors come and go with node configuration), so stale series must
    /// not survive into the next publish.
    pub fn reset_all(&self) {
        for vec in self.gauges.values() {
            vec.reset();
        }
        for vec in self.counters.values() {
            vec.reset();
        }
    }

    /// Write a cluster-labeled gauge
    pub fn set_gauge(&self, name: &str, cluster: &str, value: f64) {
        self.gauge(name).with_label_values(&[cluster]).set(value);
    }

    /// Write one series of a dimension-labeled gauge
    pub fn set_gauge_with(&self, name: &str, cluster: &str, dimension: &str, value: f64) {
        self.gauge(name)
            .with_label_values(&[cluster, dimension])
            .set(value);
    }

    /// Write a cluster-labeled counter to an absolute value
    pub fn set_counter(&self, name: &str, cluster: &str, value: f64) {
        let counter = self.counter(name);
        // Counters cannot be set directly: clear the series first so a
        // repeated write in the same cycle overwrites instead of summing.
        // inc_by rejects negative values, so sentinels like -1 export as zero.
        counter.remove_label_values(&[cluster]).ok();
        counter.with_label_values(&[cluster]).inc_by(value.max(0.0));
    }

    /// Write one series of a dimension-labeled counter to an absolute value
    pub fn set_counter_with(&self, name: &str, cluster: &str, dimension: &str, value: f64) {
        let counter = self.counter(name);
        counter.remove_label_values(&[cluster, dimension]).ok();
        counter
            .with_label_values(&[cluster, dimension])
            .inc_by(value.max(0.0));
    }

    /// Snapshot all counter families carrying at least one series
    pub fn collect_counters(&self) -> Vec<MetricFamily> {
        self.counters
            .values()
            .flat_map(|vec| vec.collect())
            .filter(|family| !family.get_metric().is_empty())
            .collect()
    }

    /// Snapshot all gauge families carrying at least one series
    pub fn collect_gauges(&self) -> Vec<MetricFamily> {
        self.gauges
            .values()
            .flat_map(|vec| vec.collect())
            .filter(|family| !family.get_metric().is_empty())
            .collect()
    }

    fn gauge(&self, name: &str) -> &GaugeVec {
        self.gauges
            .get(name)
            .unwrap_or_else(|| panic!("gauge {} is not in the schema tables", name))
    }

    fn counter(&self, name: &str) -> &CounterVec {
        self.counters
            .get(name)
            .unwrap_or_else(|| panic!("counter {} is not in the schema tables", name))
    }
}
