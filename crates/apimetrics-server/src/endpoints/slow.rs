use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use apimetrics_core::workload::{Entropy, SlowPlan};

use crate::endpoints::Endpoint;

pub const LABEL: &str = "slow";

/// Variable-latency endpoint with injected failures.
///
/// Sleeps for the drawn delay (only this request's task waits), then answers
/// 500 with the error body or 200 with the success body.
pub struct SlowEndpoint {
    entropy: Arc<dyn Entropy>,
}

impl SlowEndpoint {
    pub fn new(entropy: Arc<dyn Entropy>) -> Self {
        Self { entropy }
    }
}

#[async_trait]
impl Endpoint for SlowEndpoint {
    fn label(&self) -> &'static str {
        LABEL
    }

    async fn handle(&self) -> Response {
        let plan = SlowPlan::draw(self.entropy.as_ref());
        tokio::time::sleep(plan.delay).await;

        let status = if plan.outcome.is_failure() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };
        tracing::debug!(
            delay_ms = plan.delay.as_millis() as u64,
            outcome = plan.outcome.as_str(),
            "slow request finished"
        );

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            plan.outcome.body(),
        )
            .into_response()
    }
}
