//! Dining Table API

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let read_routes = Router::new().route("/api/v1/table/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route(
            "/api/v1/table",
            post(handler::create)
                .put(handler::update_status)
                .delete(handler::soft_delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    read_routes.merge(manage_routes)
}
