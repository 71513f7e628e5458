pub mod repository;
pub mod service;

pub use repository::{ComercioRepository, SeaOrmComercioRepository};
pub use service::ComercioService;
