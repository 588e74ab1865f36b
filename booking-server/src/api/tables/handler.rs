//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, DiningTableCreate, DiningTableDelete, DiningTableStatusUpdate};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/v1/table/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let table = state.tables.find_by_id(&id).await?;
    Ok(Json(table))
}

/// POST /api/v1/table
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    let table = state.tables.create(payload).await?;
    Ok(Json(table))
}

/// PUT /api/v1/table
pub async fn update_status(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableStatusUpdate>,
) -> AppResult<ApiResponse<()>> {
    state.tables.update_status(payload).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/table
pub async fn soft_delete(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableDelete>,
) -> AppResult<ApiResponse<()>> {
    state.tables.soft_delete(payload).await?;
    Ok(ApiResponse::ok())
}
