//! Member Repository (SQLite)

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{ACTIVE_PREDICATE, MemberPatch, MemberRepository, RepoResult, Scope};
use crate::db::models::MemberRecord;

const MEMBER_SELECT: &str =
    "SELECT id, name, email, password_hash, del_flg, created_at, updated_at FROM member";

#[derive(Clone)]
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MemberRecord>> {
        if !shared::util::is_valid_id(id) {
            return Ok(None);
        }
        let sql = format!("{MEMBER_SELECT} WHERE id = ? AND {ACTIVE_PREDICATE}");
        let row = sqlx::query_as::<_, MemberRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<MemberRecord>> {
        let sql = format!("{MEMBER_SELECT} WHERE email = ? AND {ACTIVE_PREDICATE}");
        let row = sqlx::query_as::<_, MemberRecord>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, member: &MemberRecord) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO member (id, name, email, password_hash, del_flg, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&member.id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.password_hash)
        .bind(member.del_flg)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_fields(&self, id: &str, patch: MemberPatch, scope: Scope) -> RepoResult<bool> {
        if !shared::util::is_valid_id(id) {
            return Ok(false);
        }
        let now = shared::util::now_millis();
        let sql = format!(
            "UPDATE member SET password_hash = COALESCE(?1, password_hash), updated_at = ?2 WHERE id = ?3{}",
            scope.sql_condition()
        );
        let rows = sqlx::query(&sql)
            .bind(patch.password_hash)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }
}
