#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Private in-memory SQLite database with migrations applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_sqlite_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
