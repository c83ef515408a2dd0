//! apimetrics core: transport-agnostic primitives shared by the server crate.
//!
//! This crate defines the error surface, the fixed response bodies, and the
//! workload model behind the demonstration endpoints. It carries no HTTP or
//! metrics dependencies so the workload can be exercised without a runtime.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ApiMetricsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod body;
pub mod error;
pub mod workload;

/// Shared result type.
pub use error::{ApiMetricsError, Result};
