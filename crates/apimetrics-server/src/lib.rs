//! apimetrics server library entry.
//!
//! Wires the metric registry, the instrumented endpoints, and the operational
//! routes into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod endpoints;
pub mod obs;
pub mod ops;
pub mod router;
