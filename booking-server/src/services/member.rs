//! Member lifecycle: registration, credential updates, login, lookup

use std::sync::Arc;

use shared::models::{
    LoginRequest, LoginResponse, MAX_NAME_LEN, MemberCreate, MemberCredentialsUpdate, MemberView,
};
use validator::Validate;

use crate::auth::{CurrentMember, JwtService, OwnershipPolicy, hash_password, verify_password};
use crate::db::models::MemberRecord;
use crate::db::repository::{MemberPatch, MemberRepository, RepoError, Scope};
use crate::utils::validation::{normalize_email, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct MemberService {
    repo: Arc<dyn MemberRepository>,
    jwt: Arc<JwtService>,
    ownership: OwnershipPolicy,
}

impl MemberService {
    pub fn new(
        repo: Arc<dyn MemberRepository>,
        jwt: Arc<JwtService>,
        ownership: OwnershipPolicy,
    ) -> Self {
        Self {
            repo,
            jwt,
            ownership,
        }
    }

    /// Create a member. Fails with `MemberEmailExists` when an active member
    /// already uses the email; the returned view never carries the hash.
    pub async fn register(&self, req: MemberCreate) -> AppResult<MemberView> {
        let req = MemberCreate {
            name: req.name.trim().to_string(),
            email: normalize_email(&req.email),
            password: req.password,
        };
        validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
        req.validate()?;

        if self.repo.find_by_email(&req.email).await?.is_some() {
            tracing::info!(email = %req.email, "Registration rejected - email already registered");
            return Err(AppError::new(ErrorCode::MemberEmailExists));
        }

        let password_hash = hash_password(&req.password).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::internal("Failed to process credentials")
        })?;

        let now = shared::util::now_millis();
        let record = MemberRecord {
            id: shared::util::new_id(),
            name: req.name,
            email: req.email,
            password_hash,
            del_flg: false,
            created_at: now,
            updated_at: now,
        };

        // The store's own uniqueness check decides concurrent registrations.
        match self.repo.insert(&record).await {
            Ok(()) => {}
            Err(RepoError::Duplicate(_)) => {
                return Err(AppError::new(ErrorCode::MemberEmailExists));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(member_id = %record.id, "Member registered");
        Ok(MemberView::from(record))
    }

    /// Register and immediately issue a session token.
    pub async fn sign_up(&self, req: MemberCreate) -> AppResult<LoginResponse> {
        let member = self.register(req).await?;
        let token = self.issue_token(&member.id, &member.name, &member.email)?;
        Ok(LoginResponse {
            name: member.name,
            email: member.email,
            token,
        })
    }

    /// Replace the password of an active member.
    pub async fn update_credentials(
        &self,
        actor: &CurrentMember,
        req: MemberCredentialsUpdate,
    ) -> AppResult<()> {
        req.validate()?;
        self.ownership.authorize(actor, &req.id)?;

        let password_hash = hash_password(&req.password).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::internal("Failed to process credentials")
        })?;

        let patch = MemberPatch {
            password_hash: Some(password_hash),
        };
        if !self.repo.update_fields(&req.id, patch, Scope::Active).await? {
            return Err(AppError::new(ErrorCode::MemberNotFound));
        }

        tracing::info!(member_id = %req.id, actor_id = %actor.id, "Member credentials updated");
        Ok(())
    }

    /// Check credentials and issue a token.
    ///
    /// A structurally invalid request (empty password, oversized email) is
    /// `ValidationFailed`. Unknown email and wrong password produce the same
    /// error; only the log tells them apart.
    pub async fn authenticate(&self, req: LoginRequest) -> AppResult<LoginResponse> {
        req.validate()?;
        let email = normalize_email(&req.email);

        let Some(member) = self.repo.find_by_email(&email).await? else {
            tracing::warn!(email = %email, "Login failed - member not found");
            return Err(AppError::invalid_credentials());
        };

        if !verify_password(&req.password, &member.password_hash) {
            tracing::warn!(email = %email, "Login failed - invalid credentials");
            return Err(AppError::invalid_credentials());
        }

        let token = self.issue_token(&member.id, &member.name, &member.email)?;
        tracing::info!(member_id = %member.id, "Member logged in");

        Ok(LoginResponse {
            name: member.name,
            email: member.email,
            token,
        })
    }

    /// Active member by id, as its public projection.
    pub async fn find_by_id(&self, id: &str) -> AppResult<MemberView> {
        self.repo
            .find_by_id(id)
            .await?
            .map(MemberView::from)
            .ok_or_else(|| AppError::new(ErrorCode::MemberNotFound))
    }

    fn issue_token(&self, id: &str, name: &str, email: &str) -> AppResult<String> {
        self.jwt.generate_token(id, name, email).map_err(|e| {
            tracing::error!(error = %e, "Token generation failed");
            AppError::internal("Failed to issue session token")
        })
    }
}
