use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use apimetrics_core::body;

use crate::endpoints::Endpoint;

pub const LABEL: &str = "fast";

/// Baseline endpoint: fixed text, no delay, no failure path.
#[derive(Debug, Default)]
pub struct FastEndpoint;

#[async_trait]
impl Endpoint for FastEndpoint {
    fn label(&self) -> &'static str {
        LABEL
    }

    async fn handle(&self) -> Response {
        (StatusCode::OK, body::FAST).into_response()
    }
}
