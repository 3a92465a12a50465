pub mod auth;
pub mod routes;
pub mod startup;

pub use startup::{build_state, run};
