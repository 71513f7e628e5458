pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod extract;
pub mod observability;
pub mod openapi;

pub use startup::{build_app, run};
pub use state::AppState;
