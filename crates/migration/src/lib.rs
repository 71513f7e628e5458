//! Migrator registering entity-specific migrations in dependency order.
//! `comercio` references `cidade`, so the owner table comes first.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_cidade;
mod m20240101_000002_create_comercio;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cidade::Migration),
            Box::new(m20240101_000002_create_comercio::Migration),
        ]
    }
}
