//! In-process metrics.
//!
//! Metrics are held in a per-process `prometheus::Registry` owned by
//! [`metrics::ApiMetrics`] and rendered by the `/metrics` handler.

pub mod metrics;

pub use metrics::ApiMetrics;
