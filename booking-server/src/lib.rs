//! Booking Server - member accounts and restaurant tables over JSON HTTP
//!
//! # Module layout
//!
//! ```text
//! booking-server/src/
//! ├── core/          # config, state, bootstrap errors, server loop
//! ├── auth/          # JWT, Argon2, gate middleware, ownership policy
//! ├── services/      # member and table lifecycles
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! ├── utils/         # logger, validation, error re-exports
//! └── db/            # repository traits, SQLite and in-memory stores
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

pub use api::build_app;
pub use auth::{CurrentMember, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Security event logging to the `security` target
///
/// ```ignore
/// security_log!("WARN", "auth_failed", error = e.to_string());
/// ```
#[macro_export]
macro_rules! security_log {
    ("ERROR", $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::error!(target: "security", event = $event, $($key = $value),*)
    };
    ("WARN", $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::warn!(target: "security", event = $event, $($key = $value),*)
    };
    ($level:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::info!(target: "security", level = $level, event = $event, $($key = $value),*)
    };
}
