
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory store per test. The pool is capped at one connection:
/// every sqlite `:memory:` connection is its own database.
pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect sqlite memory");
    migration::Migrator::fresh(&db).await.expect("migrate");
    db
}
