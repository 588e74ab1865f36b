//! Server-side record types
//!
//! These carry columns that must never reach the wire. Handlers only ever
//! see the projections from `shared::models`.

use shared::models::MemberView;

/// Member row as stored, including the password hash
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub del_flg: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<MemberRecord> for MemberView {
    fn from(record: MemberRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}
