//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, endpoints, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/fast", get(endpoints::fast))
        .route("/slow", get(endpoints::slow))
        .route("/record-metrics", get(ops::record_metrics))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
