use std::sync::Arc;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::inventory::{InventoryService, SeaOrmInventoryRepository};

/// Isolated in-memory store. One connection only: each sqlite `:memory:`
/// connection would otherwise be its own empty database.
pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::fresh(&db).await?;
    Ok(db)
}

pub async fn memory_service() -> anyhow::Result<InventoryService<SeaOrmInventoryRepository>> {
    let db = memory_db().await?;
    let repo = Arc::new(SeaOrmInventoryRepository { db });
    Ok(InventoryService::new(repo))
}
