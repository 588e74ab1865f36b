//! Authentication routes (public)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/signup", post(handler::sign_up))
}
