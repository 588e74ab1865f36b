//! Lifecycle services
//!
//! Each service owns the invariants of one entity and talks to the store
//! through its repository trait. No state is kept between calls.

pub mod member;
pub mod table;

pub use member::MemberService;
pub use table::TableService;

use crate::db::repository::RepoError;
use crate::utils::{AppError, ErrorCode};

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => {
                tracing::debug!(reason = %msg, "Store reported duplicate");
                AppError::new(ErrorCode::AlreadyExists)
            }
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Store operation failed");
                AppError::store_unavailable()
            }
        }
    }
}
