//! Service layer providing the generic CRUD handler behind the item API.
//! - `Repository`/`LinkRepository` are the persistence boundary.
//! - `EntityMapper` is the entity/transfer-object conversion contract.
//! - `EntityService` implements validated CRUD once, per (entity, dto) pair,
//!   and wraps every outcome in the uniform `Envelope`.

pub mod entity_service;
pub mod errors;
pub mod link_service;
pub mod mapper;
pub mod repository;
pub mod storage;

pub use entity_service::EntityService;
pub use errors::ServiceError;
pub use link_service::LinkService;
pub use mapper::{BrandMapper, CategoryMapper, EntityMapper};
pub use repository::{LinkRepository, Repository};
