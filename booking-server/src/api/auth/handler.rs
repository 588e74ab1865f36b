//! Authentication Handlers

use std::time::{Duration, Instant};

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse, MemberCreate};

use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppResult, ErrorCode};

/// POST /login
///
/// Every attempt takes at least `LOGIN_DELAY_MS`, so the unknown-email and
/// wrong-password paths cannot be told apart by response time.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let started = Instant::now();
    let email = req.email.clone();

    let result = state.members.authenticate(req).await;

    let floor = Duration::from_millis(state.config.login_delay_ms);
    if let Some(remaining) = floor.checked_sub(started.elapsed()) {
        tokio::time::sleep(remaining).await;
    }

    if let Err(e) = &result
        && e.code == ErrorCode::InvalidCredentials
    {
        security_log!("WARN", "login_failed", email = email);
    }

    result.map(Json)
}

/// POST /signup - register and log in with one call
pub async fn sign_up(
    State(state): State<ServerState>,
    Json(req): Json<MemberCreate>,
) -> AppResult<Json<LoginResponse>> {
    let resp = state.members.sign_up(req).await?;
    Ok(Json(resp))
}
