//! Pieces shared by every crate of the workspace: logging bootstrap and
//! small wire types that are not tied to a domain entity.

pub mod types;
pub mod utils;
