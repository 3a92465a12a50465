//! Storefront side of the catalog: a typed HTTP client for the item API and
//! the orchestration flows that compose several calls into one logical
//! create/edit action, aggregating partial failures without rollback.

pub mod client;
pub mod flows;
pub mod routes;
pub mod startup;

pub use client::{ItemApi, ItemClient};
pub use flows::{BrandFlows, FlowOutcome, StepOutcome};
pub use startup::run;
