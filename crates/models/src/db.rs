use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use configs::DatabaseConfig;

pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// Connect with pool sizing and timeouts taken from `DatabaseConfig`.
///
/// An in-memory SQLite URL is pinned to a single pooled connection, since every
/// new SQLite connection would otherwise open its own empty database.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let in_memory_sqlite = cfg.url.starts_with("sqlite:") && cfg.url.contains(":memory:");
    let (max, min) = if in_memory_sqlite { (1, 1) } else { (cfg.max_connections, cfg.min_connections) };

    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(max)
        .min_connections(min)
        .connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.acquire_timeout())
        .sqlx_logging(cfg.sqlx_logging);
    if !in_memory_sqlite {
        opt.idle_timeout(cfg.idle_timeout()).max_lifetime(cfg.max_lifetime());
    }

    let db = Database::connect(opt).await?;
    info!(max_connections = max, min_connections = min, "database pool ready");
    Ok(db)
}

/// Fresh, private in-memory SQLite database.
pub async fn connect_sqlite_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: SQLITE_MEMORY_URL.to_string(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}
