//! Utilities
//!
//! - [`AppError`] / [`ApiResponse`] - re-exported from `shared::error`
//! - [`logger`] - tracing setup
//! - [`validation`] - input checks shared by the services

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
