pub mod json_entity_store;
pub mod json_link_store;

pub use json_entity_store::JsonEntityStore;
pub use json_link_store::JsonLinkStore;
