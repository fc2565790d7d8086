//! Axum router wiring.
//!
//! The counter handler is mounted on the configured route for every method;
//! `/v1/invoke` takes raw events; the ops endpoints sit beside them.

use axum::{
    routing::{any, get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub const INVOKE_ROUTE: &str = "/v1/invoke";

/// Paths the counter route may not take over.
pub const RESERVED_ROUTES: [&str; 4] = [INVOKE_ROUTE, "/healthz", "/readyz", "/metrics"];

pub fn build_router(state: AppState) -> Router {
    let route = state.cfg().gateway.route.clone();
    Router::new()
        .route(&route, any(transport::http::counter))
        .route(INVOKE_ROUTE, post(transport::http::invoke))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
