//! Persisted entities and their connection plumbing.
//!
//! `cidade` owns zero or more `comercio` rows; `comercio.cidade_id` is a
//! required foreign key with cascade delete.

pub mod errors;
pub mod db;
pub mod cidade;
pub mod comercio;
pub mod tipo_comercio;

pub use tipo_comercio::TipoComercio;

#[cfg(test)]
mod tests;
