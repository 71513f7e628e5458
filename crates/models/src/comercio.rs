use sea_orm::entity::prelude::*;

use crate::{cidade, tipo_comercio::TipoComercio};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comercio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub responsavel: String,
    pub tipo: TipoComercio,
    pub cidade_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Cidade }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cidade => Entity::belongs_to(cidade::Entity)
                .from(Column::CidadeId)
                .to(cidade::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<cidade::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cidade.def() }
}

impl ActiveModelBehavior for ActiveModel {}
