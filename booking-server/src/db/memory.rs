//! In-memory store
//!
//! DashMap-backed repositories for development and tests. Each write holds
//! the shard lock of the record it touches, so a conditional update is one
//! atomic step just like the SQL `UPDATE ... WHERE`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::models::DiningTable;

use super::models::MemberRecord;
use super::repository::{
    MemberPatch, MemberRepository, RepoError, RepoResult, Scope, TablePatch, TableRepository,
};

#[derive(Clone, Default)]
pub struct MemoryMemberRepository {
    members: Arc<DashMap<String, MemberRecord>>,
    /// email -> id, active members only
    email_index: Arc<DashMap<String, String>>,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MemberRecord>> {
        Ok(self
            .members
            .get(id)
            .filter(|m| Scope::Active.admits(m.del_flg))
            .map(|m| m.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<MemberRecord>> {
        let Some(id) = self.email_index.get(email).map(|e| e.value().clone()) else {
            return Ok(None);
        };
        self.find_by_id(&id).await
    }

    async fn insert(&self, member: &MemberRecord) -> RepoResult<()> {
        if member.del_flg {
            self.members.insert(member.id.clone(), member.clone());
            return Ok(());
        }
        match self.email_index.entry(member.email.clone()) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!(
                "member email {} already registered",
                member.email
            ))),
            Entry::Vacant(slot) => {
                // Record goes in while the index shard is still locked.
                self.members.insert(member.id.clone(), member.clone());
                slot.insert(member.id.clone());
                Ok(())
            }
        }
    }

    async fn update_fields(&self, id: &str, patch: MemberPatch, scope: Scope) -> RepoResult<bool> {
        let Some(mut member) = self.members.get_mut(id) else {
            return Ok(false);
        };
        if !scope.admits(member.del_flg) {
            return Ok(false);
        }
        if let Some(hash) = patch.password_hash {
            member.password_hash = hash;
        }
        member.updated_at = shared::util::now_millis();
        Ok(true)
    }
}

#[derive(Clone, Default)]
pub struct MemoryTableRepository {
    tables: Arc<DashMap<String, DiningTable>>,
}

impl MemoryTableRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TableRepository for MemoryTableRepository {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        Ok(self
            .tables
            .get(id)
            .filter(|t| Scope::Active.admits(t.del_flg))
            .map(|t| t.value().clone()))
    }

    async fn insert(&self, table: &DiningTable) -> RepoResult<()> {
        match self.tables.entry(table.id.clone()) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!("table {}", table.id))),
            Entry::Vacant(slot) => {
                slot.insert(table.clone());
                Ok(())
            }
        }
    }

    async fn update_fields(&self, id: &str, patch: TablePatch, scope: Scope) -> RepoResult<bool> {
        let Some(mut table) = self.tables.get_mut(id) else {
            return Ok(false);
        };
        if !scope.admits(table.del_flg) {
            return Ok(false);
        }
        if let Some(status) = patch.status {
            table.status = status;
        }
        if let Some(del_flg) = patch.del_flg {
            table.del_flg = del_flg;
        }
        table.updated_at = shared::util::truncate_to_millis(chrono::Utc::now());
        Ok(true)
    }
}
