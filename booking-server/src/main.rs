//! booking-server binary
//!
//! Loads `.env`, sets up logging, reads configuration and serves the API
//! until Ctrl-C.

use booking_server::core::config::LogConfig;
use booking_server::{Config, Server, init_logger_with_file};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let _ = dotenvy::dotenv();

    // Logger first, so configuration errors are logged.
    let log = LogConfig::from_env();
    init_logger_with_file(&log.level, log.json, log.dir.as_deref())?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        environment = %config.environment,
        database = %config.database_url,
        ownership = ?config.member_ownership,
        "Starting booking-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    Server::new(config).run().await?;
    Ok(())
}
