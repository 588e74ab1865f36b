//! Health routes
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | liveness, never touches the store |
//! | /readiness | GET | store round-trip; 503 when the store is unavailable |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/readiness", get(readiness))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn readiness(State(state): State<ServerState>) -> AppResult<Json<ReadinessResponse>> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::store_unavailable()
    })?;

    Ok(Json(ReadinessResponse {
        status: "ready",
        store: state.store.backend_name(),
    }))
}
