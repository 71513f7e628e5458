pub mod repository;
pub mod service;

pub use repository::{CidadeRepository, SeaOrmCidadeRepository};
pub use service::CidadeService;
