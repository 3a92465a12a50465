//! Catalog entities and their transfer objects.
//! - Entities are the persisted records behind the repository boundary.
//! - Transfer objects are the wire shapes, which may carry fields the
//!   entities do not (relationship edit lists on `BrandDto`).

pub mod brand;
pub mod category;
pub mod entity;
pub mod link;

pub use brand::{Brand, BrandDto};
pub use category::{Category, CategoryDto};
pub use entity::{CatalogEntity, TransferObject};
pub use link::CategoryLink;
