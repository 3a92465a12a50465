use std::sync::Arc;

use tracing::{info, warn};

use common::Envelope;
use models::{CatalogEntity, TransferObject};

use crate::errors::ServiceError;
use crate::mapper::EntityMapper;
use crate::repository::Repository;

/// Generic CRUD handler behind the item API, implemented once per
/// (entity, transfer-object) pair via the `EntityMapper` contract.
///
/// Every operation returns a well-formed `Envelope`; repository and mapper
/// failures are captured as error messages, never propagated upward.
pub struct EntityService<R, P> {
    repo: Arc<R>,
    mapper: P,
}

impl<R, P> EntityService<R, P>
where
    P: EntityMapper,
    P::Entity: CatalogEntity + Clone + Send + Sync,
    P::Dto: TransferObject + Send,
    R: Repository<P::Entity>,
{
    pub fn new(repo: Arc<R>, mapper: P) -> Self {
        Self { repo, mapper }
    }

    pub async fn list(&self) -> Envelope<Vec<P::Dto>> {
        match self.repo.list().await {
            Ok(entities) => Envelope::ok(entities.iter().map(|e| self.mapper.to_dto(e)).collect()),
            Err(e) => Envelope::fail(e.to_string()),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Envelope<P::Dto> {
        match self.repo.get_by_id(id).await {
            Ok(Some(entity)) => Envelope::ok(self.mapper.to_dto(&entity)),
            Ok(None) => Envelope::fail("not found"),
            Err(e) => Envelope::fail(e.to_string()),
        }
    }

    pub async fn get_by_name(&self, name: &str) -> Envelope<P::Dto> {
        match self.repo.get_by_name(name).await {
            Ok(Some(entity)) => Envelope::ok(self.mapper.to_dto(&entity)),
            Ok(None) => Envelope::fail("not found"),
            Err(e) => Envelope::fail(e.to_string()),
        }
    }

    /// Validation gate first, then map, persist and commit as one unit, map
    /// back and return the dto carrying the assigned id.
    pub async fn create(&self, dto: P::Dto) -> Envelope<P::Dto> {
        let errors = dto.validate();
        if !errors.is_empty() {
            return Envelope::fail_all(errors);
        }
        match self.persist_new(dto).await {
            Ok(created) => {
                info!(id = created.id(), "entity created");
                Envelope::ok(created)
            }
            Err(e) => {
                warn!(error = %e, "create failed");
                Envelope::fail(e.to_string())
            }
        }
    }

    async fn persist_new(&self, dto: P::Dto) -> Result<P::Dto, ServiceError> {
        let entity = self.mapper.to_entity(&dto);
        let created = self.repo.create(entity).await?;
        self.repo.commit().await?;
        Ok(self.mapper.to_dto(&created))
    }

    pub async fn update(&self, dto: P::Dto) -> Envelope<P::Dto> {
        let errors = dto.validate();
        if !errors.is_empty() {
            return Envelope::fail_all(errors);
        }
        match self.persist_existing(dto).await {
            Ok(updated) => {
                info!(id = updated.id(), "entity updated");
                Envelope::ok(updated)
            }
            Err(e) => {
                warn!(error = %e, "update failed");
                Envelope::fail(e.to_string())
            }
        }
    }

    async fn persist_existing(&self, dto: P::Dto) -> Result<P::Dto, ServiceError> {
        let entity = self.mapper.to_entity(&dto);
        let updated = self.repo.update(entity).await?;
        self.repo.commit().await?;
        Ok(self.mapper.to_dto(&updated))
    }

    pub async fn delete(&self, id: i64) -> Envelope<()> {
        match self.delete_existing(id).await {
            Ok(true) => {
                info!(id, "entity deleted");
                Envelope::ok_empty()
            }
            Ok(false) => Envelope::fail("not found to delete"),
            Err(e) => {
                warn!(error = %e, "delete failed");
                Envelope::fail(e.to_string())
            }
        }
    }

    async fn delete_existing(&self, id: i64) -> Result<bool, ServiceError> {
        match self.repo.get_by_id(id).await? {
            None => Ok(false),
            Some(entity) => {
                self.repo.delete(&entity).await?;
                self.repo.commit().await?;
                Ok(true)
            }
        }
    }
}
