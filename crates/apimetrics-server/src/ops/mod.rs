//! Operational HTTP endpoints.
//!
//! - `/healthz`        : liveness
//! - `/metrics`        : Prometheus text format
//! - `/record-metrics` : manual `(endpoint, status)` counter increment
//!
//! None of these are counted or timed by the endpoint instrumentation.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use apimetrics_core::body;

use crate::app_state::AppState;

/// Labels for `/record-metrics`. Missing parameters become empty labels.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub endpoint: String,
    pub status: String,
}

impl RecordQuery {
    /// First value wins for repeated keys; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut endpoint = None;
        let mut status = None;
        for (k, v) in pairs {
            match k.as_str() {
                "endpoint" if endpoint.is_none() => endpoint = Some(v),
                "status" if status.is_none() => status = Some(v),
                _ => {}
            }
        }
        Self {
            endpoint: endpoint.unwrap_or_default(),
            status: status.unwrap_or_default(),
        }
    }
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, body::HEALTHY)
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics().render() {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            text,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "metrics render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

// Labels are recorded verbatim with no allow-list, so every distinct
// (endpoint, status) a caller sends becomes a new series for the life of the
// process.
pub async fn record_metrics(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let q = RecordQuery::from_pairs(pairs);
    state.metrics().record(&q.endpoint, &q.status);
    tracing::debug!(endpoint = %q.endpoint, status = %q.status, "manual metric recorded");
    (StatusCode::OK, body::RECORDED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let q = RecordQuery::from_pairs(pairs(&[
            ("endpoint", "a"),
            ("status", "ok"),
            ("endpoint", "b"),
            ("status", "fail"),
        ]));
        assert_eq!(q.endpoint, "a");
        assert_eq!(q.status, "ok");
    }

    #[test]
    fn missing_and_unknown_keys() {
        let q = RecordQuery::from_pairs(pairs(&[("region", "eu"), ("status", "")]));
        assert_eq!(q, RecordQuery::default());
    }
}
