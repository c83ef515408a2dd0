//! apimetrics server
//!
//! - `/fast`, `/slow` : instrumented demonstration endpoints
//! - `/record-metrics`: manual labeled counter
//! - `/metrics`       : Prometheus scrape
//!
//! Listen address and histogram buckets are the `ServerConfig` defaults.

use tracing_subscriber::{fmt, EnvFilter};

use apimetrics_core::error::{ApiMetricsError, Result};
use apimetrics_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(code = e.code().as_str(), error = %e, "apimetrics-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::ServerConfig::default();
    let listen = cfg.listen_addr()?;
    let buckets = cfg.latency_buckets.bounds()?;

    // Duplicate registration surfaces here and aborts startup.
    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, ?buckets, "apimetrics-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ApiMetricsError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiMetricsError::Internal(format!("server failed: {e}")))?;

    tracing::info!("apimetrics-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received, draining");
}
