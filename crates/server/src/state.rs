use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{CidadeService, ComercioService, SeaOrmCidadeRepository, SeaOrmComercioRepository};

pub type Cidades = CidadeService<SeaOrmCidadeRepository>;
pub type Comercios = ComercioService<SeaOrmComercioRepository>;

/// Services shared by every handler, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub cidades: Cidades,
    pub comercios: Comercios,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            cidades: CidadeService::new(Arc::new(SeaOrmCidadeRepository::new(db.clone()))),
            comercios: ComercioService::new(Arc::new(SeaOrmComercioRepository::new(db))),
        }
    }
}
