use async_trait::async_trait;

use crate::errors::ServiceError;

/// Persistence boundary for one entity type.
///
/// Mutations are staged until `commit` makes them durable; the generic CRUD
/// service performs exactly one commit per create/update/delete call.
#[async_trait]
pub trait Repository<M>: Send + Sync {
    async fn list(&self) -> Result<Vec<M>, ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<M>, ServiceError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<M>, ServiceError>;
    /// Persist a new record, assigning a nonzero id when the record carries 0.
    async fn create(&self, entity: M) -> Result<M, ServiceError>;
    /// Replace an existing record; `NotFound` when the id is absent.
    async fn update(&self, entity: M) -> Result<M, ServiceError>;
    async fn delete(&self, entity: &M) -> Result<(), ServiceError>;
    async fn commit(&self) -> Result<(), ServiceError>;
}

/// Persistence boundary for many-to-many association rows, managed outside
/// the generic CRUD path via the dedicated add/remove operations.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn add_links(&self, owner_id: i64, related: &[i64]) -> Result<(), ServiceError>;
    async fn remove_links(&self, owner_id: i64, related: &[i64]) -> Result<(), ServiceError>;
    async fn links_of(&self, owner_id: i64) -> Result<Vec<i64>, ServiceError>;
}
