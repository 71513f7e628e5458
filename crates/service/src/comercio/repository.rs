use async_trait::async_trait;
use models::comercio;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use crate::domain::Comercio;
use crate::errors::ServiceError;

/// Persistence gateway for businesses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComercioRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Comercio>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Comercio>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    /// Insert when `id` is unset or unknown, otherwise overwrite the stored row.
    /// Fails with [`ServiceError::Db`] when `cidade_id` names no city.
    async fn save(&self, comercio: Comercio) -> Result<Comercio, ServiceError>;
    /// Absent ids are a no-op.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmComercioRepository {
    db: DatabaseConnection,
}

impl SeaOrmComercioRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ComercioRepository for SeaOrmComercioRepository {
    async fn find_all(&self) -> Result<Vec<Comercio>, ServiceError> {
        let rows = comercio::Entity::find()
            .order_by_asc(comercio::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Comercio::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comercio>, ServiceError> {
        let found = comercio::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        Ok(found.map(Comercio::from))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let n = comercio::Entity::find_by_id(id).count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n > 0)
    }

    async fn save(&self, comercio: Comercio) -> Result<Comercio, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;

        let current = match comercio.id {
            Some(id) => comercio::Entity::find_by_id(id).one(&txn).await.map_err(ServiceError::db)?,
            None => None,
        };
        let saved = match current {
            Some(existing) => {
                let mut am: comercio::ActiveModel = existing.into();
                am.nome = Set(comercio.nome);
                am.responsavel = Set(comercio.responsavel);
                am.tipo = Set(comercio.tipo);
                am.cidade_id = Set(comercio.cidade_id);
                am.update(&txn).await.map_err(ServiceError::db)?
            }
            None => {
                let am = comercio::ActiveModel {
                    id: NotSet,
                    nome: Set(comercio.nome),
                    responsavel: Set(comercio.responsavel),
                    tipo: Set(comercio.tipo),
                    cidade_id: Set(comercio.cidade_id),
                };
                am.insert(&txn).await.map_err(ServiceError::db)?
            }
        };

        txn.commit().await.map_err(ServiceError::db)?;
        Ok(Comercio::from(saved))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let res = comercio::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        if res.rows_affected == 0 {
            debug!(comercio_id = id, "delete of absent comercio ignored");
        }
        Ok(())
    }
}
