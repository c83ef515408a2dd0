//! Shared application state for the apimetrics server.
//!
//! Owns the config, the metric registry, and the endpoint instances. Startup
//! errors are returned (duplicate or invalid metrics), never panicked.

use std::sync::Arc;

use apimetrics_core::error::Result;
use apimetrics_core::workload::{Entropy, ThreadEntropy};

use crate::config::ServerConfig;
use crate::endpoints::{Endpoint, FastEndpoint, SlowEndpoint};
use crate::obs::ApiMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: ApiMetrics,
    fast: FastEndpoint,
    slow: SlowEndpoint,
}

impl AppState {
    /// Build application state with the thread-local RNG.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_entropy(cfg, Arc::new(ThreadEntropy))
    }

    /// Build application state with an explicit random source for `/slow`.
    pub fn with_entropy(cfg: ServerConfig, entropy: Arc<dyn Entropy>) -> Result<Self> {
        cfg.validate()?;
        let metrics = ApiMetrics::new(&cfg.latency_buckets)?;
        Ok(Self::assemble(cfg, metrics, entropy))
    }

    /// Build application state around metrics the caller already registered.
    pub fn with_metrics(
        cfg: ServerConfig,
        metrics: ApiMetrics,
        entropy: Arc<dyn Entropy>,
    ) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::assemble(cfg, metrics, entropy))
    }

    fn assemble(cfg: ServerConfig, metrics: ApiMetrics, entropy: Arc<dyn Entropy>) -> Self {
        let fast = FastEndpoint;
        let slow = SlowEndpoint::new(entropy);

        metrics.init_endpoint(fast.label());
        metrics.init_endpoint(slow.label());

        Self {
            inner: Arc::new(AppStateInner { cfg, metrics, fast, slow }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }

    pub fn fast(&self) -> &FastEndpoint {
        &self.inner.fast
    }

    pub fn slow(&self) -> &SlowEndpoint {
        &self.inner.slow
    }
}
