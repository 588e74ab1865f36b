//! Member API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::models::{MemberCreate, MemberCredentialsUpdate, MemberView};

use crate::auth::CurrentMember;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/v1/member/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MemberView>> {
    let member = state.members.find_by_id(&id).await?;
    Ok(Json(member))
}

/// POST /api/v1/member
pub async fn create(
    State(state): State<ServerState>,
    Extension(actor): Extension<CurrentMember>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<Json<MemberView>> {
    tracing::debug!(actor_id = %actor.id, "Member registration requested");
    let member = state.members.register(payload).await?;
    Ok(Json(member))
}

/// PUT /api/v1/member
pub async fn update_credentials(
    State(state): State<ServerState>,
    Extension(actor): Extension<CurrentMember>,
    Json(payload): Json<MemberCredentialsUpdate>,
) -> AppResult<ApiResponse<()>> {
    state.members.update_credentials(&actor, payload).await?;
    Ok(ApiResponse::ok())
}
