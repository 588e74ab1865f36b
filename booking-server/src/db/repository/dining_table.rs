//! Dining Table Repository (SQLite)

use async_trait::async_trait;
use shared::models::DiningTable;
use shared::util::millis_to_utc;
use sqlx::SqlitePool;

use super::{ACTIVE_PREDICATE, RepoResult, Scope, TablePatch, TableRepository};

const TABLE_SELECT: &str =
    "SELECT id, status, type, slots, del_flg, created_at, updated_at FROM dining_table";

/// Row shape; timestamps are epoch milliseconds on disk
#[derive(Debug, sqlx::FromRow)]
struct DiningTableRow {
    id: String,
    status: String,
    #[sqlx(rename = "type")]
    table_type: String,
    slots: i32,
    del_flg: bool,
    created_at: i64,
    updated_at: i64,
}

impl From<DiningTableRow> for DiningTable {
    fn from(row: DiningTableRow) -> Self {
        Self {
            id: row.id,
            status: row.status,
            table_type: row.table_type,
            slots: row.slots,
            del_flg: row.del_flg,
            created_at: millis_to_utc(row.created_at),
            updated_at: millis_to_utc(row.updated_at),
        }
    }
}

#[derive(Clone)]
pub struct SqliteTableRepository {
    pool: SqlitePool,
}

impl SqliteTableRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableRepository for SqliteTableRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        if !shared::util::is_valid_id(id) {
            return Ok(None);
        }
        let sql = format!("{TABLE_SELECT} WHERE id = ? AND {ACTIVE_PREDICATE}");
        let row = sqlx::query_as::<_, DiningTableRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(DiningTable::from))
    }

    async fn insert(&self, table: &DiningTable) -> RepoResult<()> {
        sqlx::query(
            "INSERT INTO dining_table (id, status, type, slots, del_flg, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&table.id)
        .bind(&table.status)
        .bind(&table.table_type)
        .bind(table.slots)
        .bind(table.del_flg)
        .bind(table.created_at.timestamp_millis())
        .bind(table.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_fields(&self, id: &str, patch: TablePatch, scope: Scope) -> RepoResult<bool> {
        if !shared::util::is_valid_id(id) {
            return Ok(false);
        }
        let now = shared::util::now_millis();
        let sql = format!(
            "UPDATE dining_table SET status = COALESCE(?1, status), del_flg = COALESCE(?2, del_flg), updated_at = ?3 WHERE id = ?4{}",
            scope.sql_condition()
        );
        let rows = sqlx::query(&sql)
            .bind(patch.status)
            .bind(patch.del_flg)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }
}
