use crate::auth::{JwtConfig, OwnershipPolicy};
use crate::core::error::{Result, ServerError};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / staging / production |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | DATABASE_URL | sqlite:booking.db | SQLite URL, or `memory` |
/// | JWT_SECRET | generated in development | HMAC secret, 32+ chars |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
/// | JWT_ISSUER / JWT_AUDIENCE | booking-server / booking-clients | enforced claims |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request deadline |
/// | LOGIN_DELAY_MS | 300 | minimum duration of every login attempt |
/// | MEMBER_OWNERSHIP | open | `open` or `self_only` |
/// | LOG_LEVEL / LOG_JSON / LOG_DIR | info / false / unset | logging |
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub http_port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub request_timeout_ms: u64,
    pub login_delay_ms: u64,
    pub member_ownership: OwnershipPolicy,
    pub log: LogConfig,
}

/// Logging settings, readable on their own so the logger can start before
/// the rest of the configuration is validated
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables fall back to their defaults. Values that are set but
    /// unusable (short JWT secret, unknown ownership policy) are errors.
    pub fn from_env() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_development = environment == "development";

        let jwt = JwtConfig::from_env(is_development)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let member_ownership = match std::env::var("MEMBER_OWNERSHIP") {
            Ok(v) => v.parse().map_err(ServerError::Config)?,
            Err(_) => OwnershipPolicy::default(),
        };

        Ok(Self {
            environment,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:booking.db".into()),
            jwt,
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            login_delay_ms: std::env::var("LOGIN_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(300),
            member_ownership,
            log: LogConfig::from_env(),
        })
    }

    /// Configuration for in-process use (tests, embedding): in-memory store,
    /// no login delay, the given JWT settings.
    pub fn for_tests(jwt: JwtConfig) -> Self {
        Self {
            environment: "test".into(),
            http_port: 0,
            database_url: crate::db::MEMORY_URL.into(),
            jwt,
            request_timeout_ms: 30000,
            login_delay_ms: 0,
            member_ownership: OwnershipPolicy::Open,
            log: LogConfig::default(),
        }
    }
}
