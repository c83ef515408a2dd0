//! Instrumented demonstration endpoints.
//!
//! Every [`Endpoint`] runs through [`instrumented`], which counts the request
//! and times it under the endpoint's label. The timer is a drop guard, so the
//! observation lands on every exit path: normal return, error status, panic
//! unwind, or the request future being dropped mid-sleep.

pub mod fast;
pub mod slow;

use async_trait::async_trait;
use axum::{extract::State, response::Response};

use crate::app_state::AppState;
use crate::obs::ApiMetrics;

pub use fast::FastEndpoint;
pub use slow::SlowEndpoint;

/// A handler body with a fixed latency label.
#[async_trait]
pub trait Endpoint: Send + Sync {
    fn label(&self) -> &'static str;
    async fn handle(&self) -> Response;
}

/// Count, time, and run `endpoint`.
pub async fn instrumented(metrics: &ApiMetrics, endpoint: &dyn Endpoint) -> Response {
    let _timer = metrics.start_request(endpoint.label());
    endpoint.handle().await
}

pub async fn fast(State(app): State<AppState>) -> Response {
    instrumented(app.metrics(), app.fast()).await
}

pub async fn slow(State(app): State<AppState>) -> Response {
    instrumented(app.metrics(), app.slow()).await
}
