use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::Store;
use crate::services::{MemberService, TableService};

/// Server state - shared handles to every service
///
/// Cloned into each request by axum; all fields are cheap `Arc` clones.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | store | persistence handle (readiness checks) |
/// | jwt_service | token issue/validate, built once from config |
/// | members / tables | lifecycle services |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Store,
    pub jwt_service: Arc<JwtService>,
    pub members: MemberService,
    pub tables: TableService,
}

impl ServerState {
    /// Wire services over an opened store
    pub fn new(config: Config, store: Store) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let members = MemberService::new(
            store.members.clone(),
            jwt_service.clone(),
            config.member_ownership,
        );
        let tables = TableService::new(store.tables.clone());

        Self {
            config: Arc::new(config),
            store,
            jwt_service,
            members,
            tables,
        }
    }

    /// Open the configured store (running migrations) and wire services
    pub async fn initialize(config: Config) -> Result<Self> {
        let store = Store::connect(&config.database_url).await?;
        tracing::info!(backend = store.backend_name(), "Store ready");
        Ok(Self::new(config, store))
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
