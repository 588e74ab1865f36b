//! Authorization gate
//!
//! Axum middleware that guards mutating routes with a bearer token.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentMember, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Require a valid session token.
///
/// Reads `Authorization: Bearer <token>` and validates it. On success the
/// [`CurrentMember`] is inserted into the request extensions and the wrapped
/// handler runs. A missing, malformed, expired or otherwise invalid token is
/// rejected with `NotAuthenticated` before the handler is ever called; the
/// concrete reason only goes to the security log.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header);

    let Some(token) = token else {
        security_log!(
            "WARN",
            "auth_missing",
            method = req.method().to_string(),
            uri = req.uri().to_string()
        );
        return Err(AppError::unauthorized());
    };

    match state.jwt_service().validate_token(token) {
        Ok(claims) => {
            let member = CurrentMember::from(claims);
            req.extensions_mut().insert(member);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                method = req.method().to_string(),
                uri = req.uri().to_string()
            );
            Err(AppError::unauthorized())
        }
    }
}
