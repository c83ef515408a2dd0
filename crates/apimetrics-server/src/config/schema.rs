use std::net::SocketAddr;

use serde::Deserialize;
use apimetrics_core::error::{ApiMetricsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub latency_buckets: LatencyBuckets,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            latency_buckets: LatencyBuckets::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        self.latency_buckets.validate()?;   // Verify the scope of value
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| ApiMetricsError::BadRequest(format!("listen must be a valid SocketAddr: {e}")))
    }
}

/// Linear histogram buckets: `count` upper bounds starting at `start`, `width` apart.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatencyBuckets {
    #[serde(default = "default_bucket_start")]
    pub start: f64,

    #[serde(default = "default_bucket_width")]
    pub width: f64,

    #[serde(default = "default_bucket_count")]
    pub count: usize,
}

impl Default for LatencyBuckets {
    fn default() -> Self {
        Self {
            start: default_bucket_start(),
            width: default_bucket_width(),
            count: default_bucket_count(),
        }
    }
}

impl LatencyBuckets {
    pub fn validate(&self) -> Result<()> {
        if self.start.is_nan() || self.start < 0.0 {
            return Err(ApiMetricsError::BadRequest(
                "latency_buckets.start must be >= 0".into(),
            ));
        }
        if self.width.is_nan() || self.width <= 0.0 {
            return Err(ApiMetricsError::BadRequest(
                "latency_buckets.width must be > 0".into(),
            ));
        }
        if self.count == 0 {
            return Err(ApiMetricsError::BadRequest(
                "latency_buckets.count must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Upper bounds in seconds, ascending.
    pub fn bounds(&self) -> Result<Vec<f64>> {
        prometheus::linear_buckets(self.start, self.width, self.count)
            .map_err(|e| ApiMetricsError::Registration(format!("invalid buckets: {e}")))
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_bucket_start() -> f64 {
    0.001
}
fn default_bucket_width() -> f64 {
    0.01
}
fn default_bucket_count() -> usize {
    10
}
