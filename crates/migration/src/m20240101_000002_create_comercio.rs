//! Create `comercio` table.
//!
//! Every row belongs to a `cidade`; deleting the city removes its rows.
//! `tipo` holds the symbolic category name, never an ordinal.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comercio::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comercio::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comercio::Nome).string_len(255).not_null())
                    .col(ColumnDef::new(Comercio::Responsavel).string_len(255).not_null())
                    .col(ColumnDef::new(Comercio::Tipo).string_len(32).not_null())
                    .col(ColumnDef::new(Comercio::CidadeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comercio_cidade")
                            .from(Comercio::Table, Comercio::CidadeId)
                            .to(Cidade::Table, Cidade::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comercio_cidade_id")
                    .table(Comercio::Table)
                    .col(Comercio::CidadeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comercio::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Comercio {
    Table,
    Id,
    Nome,
    Responsavel,
    Tipo,
    CidadeId,
}

#[derive(DeriveIden)]
enum Cidade { Table, Id }
