//! Server config loader (strict parsing).
//!
//! The binary runs on [`ServerConfig::default`]; the loader exists for
//! embedders and tests that need a different listen address or buckets.

pub mod schema;

use apimetrics_core::error::{ApiMetricsError, Result};

pub use schema::{LatencyBuckets, ServerConfig};

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| ApiMetricsError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
