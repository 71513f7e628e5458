//! Create `cidade` table.
//!
//! Owner side of the cidade/comercio relationship.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cidade::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cidade::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cidade::Nome).string_len(255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cidade::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cidade { Table, Id, Nome }
