use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::cidade::repository::CidadeRepository;
use crate::domain::Cidade;
use crate::errors::ServiceError;

/// Application service for cities. Adds the existence guard on update;
/// every other operation delegates straight to the repository.
pub struct CidadeService<R: CidadeRepository> {
    repo: Arc<R>,
}

impl<R: CidadeRepository> Clone for CidadeService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CidadeRepository> CidadeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Cidade>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Cidade>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Insert-or-replace by whatever identity `cidade` carries.
    #[instrument(skip(self, cidade), fields(id = ?cidade.id))]
    pub async fn save(&self, cidade: Cidade) -> Result<Cidade, ServiceError> {
        let saved = self.repo.save(cidade).await?;
        info!(cidade_id = ?saved.id, "cidade saved");
        Ok(saved)
    }

    /// Returns `None` without touching the store when `id` is unknown.
    #[instrument(skip(self, cidade))]
    pub async fn update(&self, id: i32, mut cidade: Cidade) -> Result<Option<Cidade>, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            debug!("cidade not found for update");
            return Ok(None);
        }
        cidade.id = Some(id);
        self.repo.save(cidade).await.map(Some)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
