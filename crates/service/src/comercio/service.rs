use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::comercio::repository::ComercioRepository;
use crate::domain::Comercio;
use crate::errors::ServiceError;

/// Application service for businesses.
pub struct ComercioService<R: ComercioRepository> {
    repo: Arc<R>,
}

impl<R: ComercioRepository> Clone for ComercioService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ComercioRepository> ComercioService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Comercio>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, comercio), fields(id = ?comercio.id, cidade_id = comercio.cidade_id))]
    pub async fn save(&self, comercio: Comercio) -> Result<Comercio, ServiceError> {
        let saved = self.repo.save(comercio).await?;
        info!(comercio_id = ?saved.id, "comercio saved");
        Ok(saved)
    }

    #[instrument(skip(self, comercio))]
    pub async fn update(&self, id: i32, mut comercio: Comercio) -> Result<Option<Comercio>, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            debug!("comercio not found for update");
            return Ok(None);
        }
        comercio.id = Some(id);
        self.repo.save(comercio).await.map(Some)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
