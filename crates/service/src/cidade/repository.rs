use std::collections::HashMap;

use async_trait::async_trait;
use models::{cidade, comercio};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::Cidade;
use crate::errors::ServiceError;

/// Persistence gateway for cities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CidadeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Cidade>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Cidade>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    /// Insert when `id` is unset or unknown, otherwise overwrite the stored row.
    async fn save(&self, cidade: Cidade) -> Result<Cidade, ServiceError>;
    /// Removes the city and its businesses. Absent ids are a no-op.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCidadeRepository {
    db: DatabaseConnection,
}

impl SeaOrmCidadeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

async fn comercios_of<C: ConnectionTrait>(conn: &C, cidade_id: i32) -> Result<Vec<comercio::Model>, ServiceError> {
    comercio::Entity::find()
        .filter(comercio::Column::CidadeId.eq(cidade_id))
        .order_by_asc(comercio::Column::Id)
        .all(conn)
        .await
        .map_err(ServiceError::db)
}

#[async_trait]
impl CidadeRepository for SeaOrmCidadeRepository {
    async fn find_all(&self) -> Result<Vec<Cidade>, ServiceError> {
        let cidades = cidade::Entity::find()
            .order_by_asc(cidade::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;

        // one query for every owned row, grouped by owner
        let mut by_owner: HashMap<i32, Vec<comercio::Model>> = HashMap::new();
        let comercios = comercio::Entity::find()
            .order_by_asc(comercio::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        for c in comercios {
            by_owner.entry(c.cidade_id).or_default().push(c);
        }

        Ok(cidades
            .into_iter()
            .map(|m| {
                let owned = by_owner.remove(&m.id).unwrap_or_default();
                Cidade::from_parts(m, owned)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Cidade>, ServiceError> {
        let Some(model) = cidade::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)? else {
            return Ok(None);
        };
        let owned = comercios_of(&self.db, model.id).await?;
        Ok(Some(Cidade::from_parts(model, owned)))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let n = cidade::Entity::find_by_id(id).count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n > 0)
    }

    async fn save(&self, cidade: Cidade) -> Result<Cidade, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;

        let current = match cidade.id {
            Some(id) => cidade::Entity::find_by_id(id).one(&txn).await.map_err(ServiceError::db)?,
            None => None,
        };
        let saved = match current {
            Some(existing) => {
                let mut am: cidade::ActiveModel = existing.into();
                am.nome = Set(cidade.nome);
                am.update(&txn).await.map_err(ServiceError::db)?
            }
            None => {
                let am = cidade::ActiveModel { id: NotSet, nome: Set(cidade.nome) };
                am.insert(&txn).await.map_err(ServiceError::db)?
            }
        };
        let owned = comercios_of(&txn, saved.id).await?;

        txn.commit().await.map_err(ServiceError::db)?;
        Ok(Cidade::from_parts(saved, owned))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let cascaded = comercio::Entity::delete_many()
            .filter(comercio::Column::CidadeId.eq(id))
            .exec(&txn)
            .await
            .map_err(ServiceError::db)?;
        let res = cidade::Entity::delete_by_id(id).exec(&txn).await.map_err(ServiceError::db)?;
        txn.commit().await.map_err(ServiceError::db)?;

        if res.rows_affected == 0 {
            debug!(cidade_id = id, "delete of absent cidade ignored");
        } else {
            debug!(cidade_id = id, comercios = cascaded.rows_affected, "cidade deleted");
        }
        Ok(())
    }
}
