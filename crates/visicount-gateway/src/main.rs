//! visicount gateway binary.
//!
//! - Counter endpoint on `gateway.route` (default `/visitor-counter`)
//! - Raw event endpoint on `/v1/invoke`
//! - Ops endpoints: `/healthz`, `/readyz`, `/metrics`
//! - Graceful shutdown on Ctrl-C / SIGTERM (readiness flips to draining first)

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use visicount_core::error::{CounterError, Result};
use visicount_gateway::{app_state::AppState, config, obs::GatewayMetrics, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "visicount-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = AppState::from_config(cfg).await?;
    let metrics = state.metrics();
    let route = state.cfg().gateway.route.clone();
    let app = router::build_router(state);

    tracing::info!(%listen, %route, config = %path, "visicount-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| CounterError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(metrics))
        .await
        .map_err(|e| CounterError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(metrics: std::sync::Arc<GatewayMetrics>) {
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
    metrics.set_draining();
    tracing::info!("signal received, draining and shutting down");
}
