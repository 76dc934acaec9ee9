//! Metric schema and instruments
//!
//! This module provides:
//! - The fixed tables declaring every exported metric (name, help, labels)
//! - Live prometheus instruments built from those tables, with per-cycle
//!   reset and label-order-fixing setters

pub mod instruments;
pub mod schema;

pub use instruments::Instruments;
pub use schema::{
    all_specs, counter_specs, gauge_specs, verify_unique_names, MetricSpec, CLUSTER_LABEL,
    NAMESPACE, SCALAR_COUNTERS, SCALAR_GAUGES, VECTOR_COUNTERS, VECTOR_GAUGES,
};
