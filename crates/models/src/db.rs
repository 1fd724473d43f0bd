//! Connection provider.
//!
//! Builds SeaORM `ConnectOptions` from an explicit `DatabaseConfig` instead
//! of ambient globals; the pooled `DatabaseConnection` scopes acquisition and
//! guarantees release on every exit path.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::debug;

pub use configs::DatabaseConfig;

/// Connect using `config.toml` when present, env-derived config otherwise.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig::from_file().unwrap_or_else(|_| DatabaseConfig::from_env());
    connect_with_config(&cfg).await
}

/// Connect with an explicit configuration. No retry on failure.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    debug!(host = %cfg.host, db = %cfg.name, "opening database connection pool");
    let mut opts = ConnectOptions::new(cfg.connection_url());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}
