//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    store_available: bool,
}

/// Public health check endpoint.
///
/// Returns basic service health for load balancer probes, including whether
/// the content store client is configured.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "brotech-site",
        version: env!("CARGO_PKG_VERSION"),
        store_available: state.store.is_available(),
    })
}
