//! Repository Module
//!
//! Store capabilities per entity, independent of the backing engine. Every
//! implementation hides soft-deleted rows from reads through one predicate
//! and performs writes as a single conditional update.

pub mod dining_table;
pub mod member;

pub use dining_table::SqliteTableRepository;
pub use member::SqliteMemberRepository;

use async_trait::async_trait;
use shared::models::DiningTable;
use thiserror::Error;

use crate::db::models::MemberRecord;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for RepoError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        RepoError::Database(format!("Failed to apply migrations: {err}"))
    }
}

/// The one soft-delete predicate every SQL read and scoped write uses
pub(crate) const ACTIVE_PREDICATE: &str = "del_flg = 0";

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Which records a conditional write may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only records whose `del_flg` is false
    Active,
    /// Any record with the id, retired or not
    Any,
}

impl Scope {
    /// Extra SQL condition for a `WHERE id = ?` clause
    pub(crate) fn sql_condition(self) -> String {
        match self {
            Scope::Active => format!(" AND {ACTIVE_PREDICATE}"),
            Scope::Any => String::new(),
        }
    }

    /// Whether a record with this flag is in scope
    pub(crate) fn admits(self, del_flg: bool) -> bool {
        match self {
            Scope::Active => !del_flg,
            Scope::Any => true,
        }
    }
}

/// Fields a member update may change. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub password_hash: Option<String>,
}

/// Fields a table update may change. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct TablePatch {
    pub status: Option<String>,
    pub del_flg: Option<bool>,
}

/// Member persistence capability
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Active member by id. Unknown or malformed ids yield `None`.
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MemberRecord>>;

    /// Active member by (normalized) email.
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<MemberRecord>>;

    /// Insert a new member; `Duplicate` if an active member holds the email.
    async fn insert(&self, member: &MemberRecord) -> RepoResult<()>;

    /// Apply `patch` and refresh `updated_at`. Returns `false` when no record
    /// in `scope` has this id.
    async fn update_fields(&self, id: &str, patch: MemberPatch, scope: Scope) -> RepoResult<bool>;
}

/// Dining table persistence capability
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Active table by id. Unknown or malformed ids yield `None`.
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>>;

    async fn insert(&self, table: &DiningTable) -> RepoResult<()>;

    /// Apply `patch` and refresh `updated_at`. Returns `false` when no record
    /// in `scope` has this id.
    async fn update_fields(&self, id: &str, patch: TablePatch, scope: Scope) -> RepoResult<bool>;
}
