use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::product::{InMemoryProductRepository, ProductRepository, SeaOrmProductRepository};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Pick and prepare the storage gateway described by the database config.
pub async fn build_repository(cfg: &DatabaseConfig) -> Result<Arc<dyn ProductRepository>, StartupError> {
    if cfg.is_memory() {
        info!(store = "memory", "using in-memory product store");
        return Ok(Arc::new(InMemoryProductRepository::new()));
    }

    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        info!("database migrations applied");
    }
    info!(store = "sea-orm", "using database product store");
    Ok(Arc::new(SeaOrmProductRepository::new(db)))
}

/// Wire gateway -> service -> router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let repo = build_repository(&cfg.database).await?;
    let state = AppState::new(repo);
    Ok(routes::build_router(state, build_cors()))
}

/// Load `CONFIG_PATH` (default `config.toml`), or env vars when it is absent, and validate it.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

pub fn load_config_from(path: &str) -> Result<AppConfig, StartupError> {
    AppConfig::load_from_path_or_env(path).map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Public entry: build the app from an already loaded config and serve it
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "product catalog listening");
    axum::serve(listener, app).await?;
    Ok(())
}
