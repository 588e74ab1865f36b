//! HTTP API
//!
//! | Path | Methods | Gate |
//! |------|---------|------|
//! | /health, /readiness | GET | no |
//! | /login, /signup | POST | no |
//! | /api/v1/member/{id} | GET | no |
//! | /api/v1/member | POST, PUT | yes |
//! | /api/v1/table/{id} | GET | no |
//! | /api/v1/table | POST, PUT, DELETE | yes |

pub mod auth;
pub mod health;
pub mod members;
pub mod tables;

use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware::logging_middleware;
use crate::utils::{AppError, ErrorCode};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// All routes, gate applied to the mutating ones, no outer middleware
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(members::router(state))
        .merge(tables::router(state))
        .fallback(route_not_found)
}

/// Unknown paths answer with the JSON error envelope
async fn route_not_found() -> AppError {
    AppError::new(ErrorCode::NotFound)
}

/// Fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router(&state)
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
