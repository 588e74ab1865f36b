//! Authentication and authorization
//!
//! - [`JwtService`] - session token issue/validate
//! - [`password`] - Argon2 hashing
//! - [`require_auth`] - the gate on mutating routes
//! - [`OwnershipPolicy`] - who may mutate which member record

pub mod jwt;
pub mod middleware;
pub mod ownership;
pub mod password;

pub use jwt::{Claims, CurrentMember, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
pub use ownership::OwnershipPolicy;
pub use password::{hash_password, verify_password};
