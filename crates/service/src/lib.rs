//! Service layer providing the CRUD operations of cities and businesses.
//! - Repositories are the persistence gateway, one trait per entity, with
//!   SeaORM implementations.
//! - Services add the existence guard on update on top of the repositories.
//! - Domain records in [`domain`] are what every layer above exchanges.

pub mod errors;
pub mod domain;
pub mod cidade;
pub mod comercio;
#[cfg(test)]
pub mod test_support;

pub use cidade::{CidadeRepository, CidadeService, SeaOrmCidadeRepository};
pub use comercio::{ComercioRepository, ComercioService, SeaOrmComercioRepository};
pub use domain::{Cidade, Comercio};
pub use errors::ServiceError;
