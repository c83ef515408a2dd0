//! Shared helpers for server integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use apimetrics_core::workload::Entropy;
use apimetrics_server::{app_state::AppState, config::ServerConfig, router};

/// Replays the same delay and failure roll for every slow request, in draw order.
pub struct Fixed {
    draws: [u32; 2],
    next: Mutex<usize>,
}

impl Fixed {
    pub fn new(delay_ms: u32, roll: u32) -> Self {
        Self { draws: [delay_ms, roll], next: Mutex::new(0) }
    }
}

impl Entropy for Fixed {
    fn below(&self, upper: u32) -> u32 {
        let mut next = self.next.lock().unwrap();
        let v = self.draws[*next % self.draws.len()];
        *next += 1;
        assert!(v < upper, "scripted value {v} out of range {upper}");
        v
    }
}

pub fn succeeding() -> Arc<Fixed> {
    Arc::new(Fixed::new(0, 9))
}

pub fn failing() -> Arc<Fixed> {
    Arc::new(Fixed::new(0, 0))
}

pub fn state_with(entropy: Arc<dyn Entropy>) -> AppState {
    AppState::with_entropy(ServerConfig::default(), entropy).unwrap()
}

pub fn app(state: &AppState) -> Router {
    router::build_router(state.clone())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Value of the first sample line whose name matches and that contains every label fragment.
pub fn sample(scrape: &str, name: &str, labels: &[&str]) -> Option<f64> {
    scrape
        .lines()
        .filter(|l| !l.starts_with('#'))
        .filter(|l| {
            l.split(|c: char| c == '{' || c == ' ').next() == Some(name)
        })
        .find(|l| labels.iter().all(|frag| l.contains(frag)))
        .and_then(|l| l.rsplit(' ').next())
        .and_then(|v| v.parse().ok())
}

/// Bucket counts for one histogram series, in exposition order (ending with `+Inf`).
pub fn buckets(scrape: &str, name: &str, label: &str) -> Vec<f64> {
    let prefix = format!("{name}_bucket{{");
    scrape
        .lines()
        .filter(|l| l.starts_with(&prefix) && l.contains(label))
        .map(|l| l.rsplit(' ').next().unwrap().parse().unwrap())
        .collect()
}
