//! Metric registry for the server.
//!
//! Three families are registered once at startup and never restructured:
//! an unlabeled request counter, a per-endpoint latency histogram, and a
//! manually driven `(endpoint, status)` counter. Values are atomics inside
//! the `prometheus` types, so handlers update them without locks while
//! scrapes gather concurrently.

use std::fmt::Write;

use prometheus::{
    Encoder, HistogramOpts, HistogramTimer, HistogramVec, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

use apimetrics_core::error::{ApiMetricsError, Result};

use crate::config::LatencyBuckets;

pub const TOTAL_REQUESTS: &str = "total_requests_count";
pub const REQUEST_DURATION: &str = "api_request_duration_seconds";
pub const API_REQUESTS: &str = "api_requests_total";

const TOTAL_REQUESTS_HELP: &str = "Total number of API requests";
const REQUEST_DURATION_HELP: &str = "Distribution of request duration in seconds";
const API_REQUESTS_HELP: &str = "Total number of API requests";

// (name, help, type) for every registered family.
const FAMILIES: [(&str, &str, &str); 3] = [
    (TOTAL_REQUESTS, TOTAL_REQUESTS_HELP, "counter"),
    (REQUEST_DURATION, REQUEST_DURATION_HELP, "histogram"),
    (API_REQUESTS, API_REQUESTS_HELP, "counter"),
];

fn registration(e: prometheus::Error) -> ApiMetricsError {
    ApiMetricsError::Registration(e.to_string())
}

#[derive(Clone)]
pub struct ApiMetrics {
    registry: Registry,
    pub total_requests: IntCounter,
    /// Latency in seconds, labeled by endpoint.
    pub request_duration: HistogramVec,
    pub api_requests: IntCounterVec,
}

impl ApiMetrics {
    /// Build all families into a fresh registry.
    pub fn new(buckets: &LatencyBuckets) -> Result<Self> {
        Self::register_into(Registry::new(), buckets)
    }

    /// Build all families into `registry`.
    ///
    /// Fails with `Registration` if any family name is already taken there.
    pub fn register_into(registry: Registry, buckets: &LatencyBuckets) -> Result<Self> {
        let total_requests =
            IntCounter::new(TOTAL_REQUESTS, TOTAL_REQUESTS_HELP).map_err(registration)?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new(REQUEST_DURATION, REQUEST_DURATION_HELP).buckets(buckets.bounds()?),
            &["endpoint"],
        )
        .map_err(registration)?;
        let api_requests = IntCounterVec::new(
            Opts::new(API_REQUESTS, API_REQUESTS_HELP),
            &["endpoint", "status"],
        )
        .map_err(registration)?;

        registry.register(Box::new(total_requests.clone())).map_err(registration)?;
        registry.register(Box::new(request_duration.clone())).map_err(registration)?;
        registry.register(Box::new(api_requests.clone())).map_err(registration)?;

        Ok(Self { registry, total_requests, request_duration, api_requests })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Create the histogram series for `endpoint` so it is scraped with zero counts.
    pub fn init_endpoint(&self, endpoint: &str) {
        let _ = self.request_duration.with_label_values(&[endpoint]);
    }

    /// Count one request and start its latency timer.
    ///
    /// The returned timer observes the elapsed seconds into the `endpoint`
    /// series when dropped, so unwinding and cancelled futures are timed too.
    pub fn start_request(&self, endpoint: &str) -> HistogramTimer {
        self.total_requests.inc();
        self.request_duration.with_label_values(&[endpoint]).start_timer()
    }

    /// Increment the manual `(endpoint, status)` counter. Labels are taken verbatim.
    pub fn record(&self, endpoint: &str, status: &str) {
        self.api_requests.with_label_values(&[endpoint, status]).inc();
    }

    /// Render in Prometheus text exposition format.
    ///
    /// Vector families without any series are skipped by the encoder; their
    /// HELP/TYPE headers are appended so every registered family is listed.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buf)
            .map_err(|e| ApiMetricsError::Internal(format!("encode metrics failed: {e}")))?;
        let mut out = String::from_utf8(buf)
            .map_err(|e| ApiMetricsError::Internal(format!("metrics not utf-8: {e}")))?;

        for (name, help, kind) in FAMILIES {
            if !out.contains(&format!("# TYPE {name} ")) {
                let _ = writeln!(out, "# HELP {name} {help}");
                let _ = writeln!(out, "# TYPE {name} {kind}");
            }
        }
        Ok(out)
    }
}
