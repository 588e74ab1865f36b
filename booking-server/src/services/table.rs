//! Dining table lifecycle: create, status changes, soft delete

use std::sync::Arc;

use shared::models::{
    DiningTable, DiningTableCreate, DiningTableDelete, DiningTableStatusUpdate, MAX_TABLE_TEXT_LEN,
};
use validator::Validate;

use crate::db::repository::{Scope, TablePatch, TableRepository};
use crate::utils::validation::validate_required_text;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct TableService {
    repo: Arc<dyn TableRepository>,
}

impl TableService {
    pub fn new(repo: Arc<dyn TableRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, req: DiningTableCreate) -> AppResult<DiningTable> {
        let req = DiningTableCreate {
            status: req.status.trim().to_string(),
            table_type: req.table_type.trim().to_string(),
            slots: req.slots,
        };
        validate_required_text(&req.status, "status", MAX_TABLE_TEXT_LEN)?;
        validate_required_text(&req.table_type, "type", MAX_TABLE_TEXT_LEN)?;
        req.validate()?;

        let now = shared::util::truncate_to_millis(chrono::Utc::now());
        let table = DiningTable {
            id: shared::util::new_id(),
            status: req.status,
            table_type: req.table_type,
            slots: req.slots,
            del_flg: false,
            created_at: now,
            updated_at: now,
        };
        self.repo.insert(&table).await?;

        tracing::info!(table_id = %table.id, slots = table.slots, "Dining table created");
        Ok(table)
    }

    /// Change the status of an active table.
    pub async fn update_status(&self, req: DiningTableStatusUpdate) -> AppResult<()> {
        let status = req.status.trim().to_string();
        validate_required_text(&status, "status", MAX_TABLE_TEXT_LEN)?;

        let patch = TablePatch {
            status: Some(status),
            ..Default::default()
        };
        if !self.repo.update_fields(&req.id, patch, Scope::Active).await? {
            return Err(AppError::new(ErrorCode::TableNotFound));
        }

        tracing::info!(table_id = %req.id, "Dining table status updated");
        Ok(())
    }

    /// Set the soft-delete flag. Retired tables are still addressable here,
    /// so `del_flg = false` brings one back.
    pub async fn soft_delete(&self, req: DiningTableDelete) -> AppResult<()> {
        let patch = TablePatch {
            del_flg: Some(req.del_flg),
            ..Default::default()
        };
        if !self.repo.update_fields(&req.id, patch, Scope::Any).await? {
            return Err(AppError::new(ErrorCode::TableNotFound));
        }

        tracing::info!(table_id = %req.id, del_flg = req.del_flg, "Dining table delete flag set");
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<DiningTable> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::TableNotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    fn service() -> TableService {
        TableService::new(Store::memory().tables)
    }

    async fn sqlite_service() -> (TableService, sqlx::SqlitePool) {
        let pool = crate::db::open_sqlite("sqlite::memory:").await.unwrap();
        (TableService::new(Store::sqlite(pool.clone()).tables), pool)
    }

    async fn table_rows(pool: &sqlx::SqlitePool) -> Vec<(String, String, i64)> {
        sqlx::query_as("SELECT id, status, updated_at FROM dining_table ORDER BY id")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    fn create(slots: i32) -> DiningTableCreate {
        DiningTableCreate {
            status: "free".into(),
            table_type: "patio".into(),
            slots,
        }
    }

    #[tokio::test]
    async fn create_sets_defaults() {
        let svc = service();
        let table = svc.create(create(4)).await.unwrap();

        assert!(!table.del_flg);
        assert_eq!(table.slots, 4);
        assert_eq!(table.created_at, table.updated_at);
        assert_eq!(svc.find_by_id(&table.id).await.unwrap(), table);
    }

    #[tokio::test]
    async fn create_rejects_bad_input() {
        let svc = service();
        for payload in [
            create(11),
            create(0),
            DiningTableCreate {
                status: " ".into(),
                ..create(2)
            },
            DiningTableCreate {
                table_type: "".into(),
                ..create(2)
            },
        ] {
            let err = svc.create(payload).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
    }

    #[tokio::test]
    async fn update_status_unknown_table() {
        let svc = service();
        let err = svc
            .update_status(DiningTableStatusUpdate {
                id: shared::util::new_id(),
                status: "occupied".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
    }

    #[tokio::test]
    async fn rejected_create_persists_nothing() {
        let (svc, pool) = sqlite_service().await;

        let err = svc.create(create(11)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(table_rows(&pool).await.is_empty());

        svc.create(create(10)).await.unwrap();
        assert_eq!(table_rows(&pool).await.len(), 1);
    }

    #[tokio::test]
    async fn update_status_unknown_table_leaves_store_unchanged() {
        let (svc, pool) = sqlite_service().await;
        svc.create(create(4)).await.unwrap();
        let before = table_rows(&pool).await;

        let err = svc
            .update_status(DiningTableStatusUpdate {
                id: shared::util::new_id(),
                status: "occupied".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
        assert_eq!(table_rows(&pool).await, before);
    }

    #[tokio::test]
    async fn update_status_refreshes_updated_at() {
        let svc = service();
        let table = svc.create(create(2)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        svc.update_status(DiningTableStatusUpdate {
            id: table.id.clone(),
            status: "occupied".into(),
        })
        .await
        .unwrap();

        let after = svc.find_by_id(&table.id).await.unwrap();
        assert_eq!(after.status, "occupied");
        assert!(after.updated_at > table.updated_at);
        assert_eq!(after.created_at, table.created_at);
    }

    #[tokio::test]
    async fn soft_delete_hides_and_restore_brings_back() {
        let svc = service();
        let table = svc.create(create(6)).await.unwrap();

        svc.soft_delete(DiningTableDelete {
            id: table.id.clone(),
            del_flg: true,
        })
        .await
        .unwrap();
        assert_eq!(
            svc.find_by_id(&table.id).await.unwrap_err().code,
            ErrorCode::TableNotFound
        );

        // Retired tables reject status changes.
        let err = svc
            .update_status(DiningTableStatusUpdate {
                id: table.id.clone(),
                status: "occupied".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);

        svc.soft_delete(DiningTableDelete {
            id: table.id.clone(),
            del_flg: false,
        })
        .await
        .unwrap();
        assert!(!svc.find_by_id(&table.id).await.unwrap().del_flg);
    }

    #[tokio::test]
    async fn soft_delete_unknown_table() {
        let svc = service();
        let err = svc
            .soft_delete(DiningTableDelete {
                id: "nope".into(),
                del_flg: true,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
    }
}
