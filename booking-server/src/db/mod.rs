//! Database Module
//!
//! Opens the configured store: SQLite (connection pool + embedded
//! migrations) or the in-memory DashMap store.

pub mod memory;
pub mod models;
pub mod repository;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use memory::{MemoryMemberRepository, MemoryTableRepository};
use repository::{
    MemberRepository, RepoError, RepoResult, SqliteMemberRepository, SqliteTableRepository,
    TableRepository,
};

/// `DATABASE_URL` value selecting the in-memory store
pub const MEMORY_URL: &str = "memory";

#[derive(Clone)]
enum Backend {
    Sqlite(SqlitePool),
    Memory,
}

/// Handle to the persistence collaborator, shared by every request
#[derive(Clone)]
pub struct Store {
    pub members: Arc<dyn MemberRepository>,
    pub tables: Arc<dyn TableRepository>,
    backend: Backend,
}

impl Store {
    /// Open the store named by `database_url`.
    pub async fn connect(database_url: &str) -> RepoResult<Self> {
        if database_url == MEMORY_URL {
            tracing::info!("Using in-memory store");
            return Ok(Self::memory());
        }
        let pool = open_sqlite(database_url).await?;
        Ok(Self::sqlite(pool))
    }

    /// In-memory store, empty on every call
    pub fn memory() -> Self {
        Self {
            members: Arc::new(MemoryMemberRepository::new()),
            tables: Arc::new(MemoryTableRepository::new()),
            backend: Backend::Memory,
        }
    }

    /// Store over an already migrated SQLite pool
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self {
            members: Arc::new(SqliteMemberRepository::new(pool.clone())),
            tables: Arc::new(SqliteTableRepository::new(pool.clone())),
            backend: Backend::Sqlite(pool),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Sqlite(_) => "sqlite",
            Backend::Memory => "memory",
        }
    }

    /// Round-trip to the backing engine (readiness probe)
    pub async fn ping(&self) -> RepoResult<()> {
        match &self.backend {
            Backend::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Backend::Memory => Ok(()),
        }
    }
}

/// Open a SQLite pool with WAL and a busy timeout, then run migrations.
///
/// In-memory SQLite URLs get a single long-lived connection, since every
/// connection would otherwise see its own empty database.
pub async fn open_sqlite(database_url: &str) -> RepoResult<SqlitePool> {
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let mut options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| RepoError::Database(format!("Invalid database url: {e}")))?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .pragma("foreign_keys", "ON");
    if !in_memory {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let mut pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(5));
    pool_options = if in_memory {
        pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(in_memory, "Database connection established (SQLite, busy_timeout=5000ms)");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MemberRecord;
    use repository::{MemberPatch, Scope, TablePatch};
    use shared::models::DiningTable;
    use shared::util::{new_id, now_millis, truncate_to_millis};

    async fn sqlite_store() -> Store {
        let pool = open_sqlite("sqlite::memory:").await.unwrap();
        Store::sqlite(pool)
    }

    fn member(email: &str) -> MemberRecord {
        let now = now_millis();
        MemberRecord {
            id: new_id(),
            name: "Ana".into(),
            email: email.into(),
            password_hash: "$argon2id$fake".into(),
            del_flg: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn table(slots: i32) -> DiningTable {
        let now = truncate_to_millis(chrono::Utc::now());
        DiningTable {
            id: new_id(),
            status: "free".into(),
            table_type: "patio".into(),
            slots,
            del_flg: false,
            created_at: now,
            updated_at: now,
        }
    }

    async fn exercise_members(store: Store) {
        let ana = member("ana@example.com");
        store.members.insert(&ana).await.unwrap();

        let found = store.members.find_by_id(&ana.id).await.unwrap();
        assert_eq!(found.as_ref(), Some(&ana));
        let by_email = store.members.find_by_email("ana@example.com").await.unwrap();
        assert_eq!(by_email.map(|m| m.id), Some(ana.id.clone()));

        let dup = store.members.insert(&member("ana@example.com")).await;
        assert!(matches!(dup, Err(RepoError::Duplicate(_))));

        let patch = MemberPatch {
            password_hash: Some("$argon2id$other".into()),
        };
        assert!(store.members.update_fields(&ana.id, patch, Scope::Active).await.unwrap());
        let updated = store.members.find_by_id(&ana.id).await.unwrap().unwrap();
        assert_eq!(updated.password_hash, "$argon2id$other");
        assert_eq!(updated.name, "Ana");

        let missing = store
            .members
            .update_fields(&new_id(), MemberPatch::default(), Scope::Active)
            .await
            .unwrap();
        assert!(!missing);
        assert!(store.members.find_by_id("not-a-uuid").await.unwrap().is_none());
    }

    async fn exercise_tables(store: Store) {
        let t = table(4);
        store.tables.insert(&t).await.unwrap();
        assert_eq!(store.tables.find_by_id(&t.id).await.unwrap(), Some(t.clone()));

        let retire = TablePatch {
            del_flg: Some(true),
            ..Default::default()
        };
        assert!(store.tables.update_fields(&t.id, retire, Scope::Any).await.unwrap());
        assert!(store.tables.find_by_id(&t.id).await.unwrap().is_none());

        // Retired tables are out of scope for active-only writes.
        let status = TablePatch {
            status: Some("occupied".into()),
            ..Default::default()
        };
        assert!(!store.tables.update_fields(&t.id, status, Scope::Active).await.unwrap());

        let restore = TablePatch {
            del_flg: Some(false),
            ..Default::default()
        };
        assert!(store.tables.update_fields(&t.id, restore, Scope::Any).await.unwrap());
        let back = store.tables.find_by_id(&t.id).await.unwrap().unwrap();
        assert_eq!(back.status, "free");
        assert!(!back.del_flg);
        assert!(back.updated_at >= t.updated_at);
    }

    #[tokio::test]
    async fn sqlite_member_repository() {
        exercise_members(sqlite_store().await).await;
    }

    #[tokio::test]
    async fn memory_member_repository() {
        exercise_members(Store::memory()).await;
    }

    #[tokio::test]
    async fn sqlite_table_repository() {
        exercise_tables(sqlite_store().await).await;
    }

    #[tokio::test]
    async fn memory_table_repository() {
        exercise_tables(Store::memory()).await;
    }

    #[tokio::test]
    async fn sqlite_rejects_out_of_range_slots() {
        let store = sqlite_store().await;
        let result = store.tables.insert(&table(11)).await;
        assert!(matches!(result, Err(RepoError::Database(_))));
    }

    #[tokio::test]
    async fn ping_and_backend_name() {
        let store = sqlite_store().await;
        store.ping().await.unwrap();
        assert_eq!(store.backend_name(), "sqlite");

        let memory = Store::connect(MEMORY_URL).await.unwrap();
        memory.ping().await.unwrap();
        assert_eq!(memory.backend_name(), "memory");
    }
}
