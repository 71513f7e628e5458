use sea_orm::entity::prelude::*;

use crate::comercio;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cidade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Comercio }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Comercio => Entity::has_many(comercio::Entity).into(),
        }
    }
}

impl Related<comercio::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comercio.def() }
}

impl ActiveModelBehavior for ActiveModel {}
