use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;

/// Application over a fresh in-memory SQLite store with migrations applied.
pub async fn test_app() -> anyhow::Result<Router> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(server::build_app(db))
}
