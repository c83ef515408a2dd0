//! Fixed response bodies.
//!
//! Clients and dashboards match on these literals, so they are kept verbatim
//! (including the spacing inside the JSON objects).

pub const FAST: &str = "This is a fast API endpoint";

pub const SLOW_SUCCESS: &str = r#"{"status": "success", "message": "Slow API call processed"}"#;

pub const SLOW_ERROR: &str = r#"{"status": "error", "message": "Internal Server Error"}"#;

pub const RECORDED: &str = "Metrics recorded successfully";

pub const HEALTHY: &str = "ok";
