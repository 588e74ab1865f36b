//! Resource ownership checks
//!
//! The gate proves who is calling; this module decides whether that caller
//! may act on a given member record.

use std::str::FromStr;

use crate::auth::CurrentMember;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Who may mutate a member record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipPolicy {
    /// Any authenticated member may act on any member record
    #[default]
    Open,
    /// A member may only act on their own record
    SelfOnly,
}

impl OwnershipPolicy {
    /// Check that `actor` may act on the member identified by `target_id`.
    pub fn authorize(&self, actor: &CurrentMember, target_id: &str) -> AppResult<()> {
        match self {
            OwnershipPolicy::Open => Ok(()),
            OwnershipPolicy::SelfOnly if actor.id == target_id => Ok(()),
            OwnershipPolicy::SelfOnly => {
                security_log!(
                    "WARN",
                    "ownership_denied",
                    actor_id = actor.id.clone(),
                    target_id = target_id.to_string()
                );
                Err(AppError::permission_denied(
                    "You may only modify your own account",
                ))
            }
        }
    }
}

impl FromStr for OwnershipPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(OwnershipPolicy::Open),
            "self_only" | "self" => Ok(OwnershipPolicy::SelfOnly),
            other => Err(format!("unknown ownership policy: {other}")),
        }
    }
}
