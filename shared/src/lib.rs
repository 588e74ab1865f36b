//! Shared types for the booking backend
//!
//! Common types used by the server and its clients: the unified error
//! system, wire models for members and dining tables, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
