use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};

use models::CatalogEntity;

use crate::errors::ServiceError;
use crate::repository::Repository;

/// Generic JSON file-backed entity store.
///
/// Holds records in a `RwLock<HashMap<id, M>>`; mutations stay in memory
/// until `commit` flushes the whole map to the file. Ids are assigned from
/// the current maximum when a record arrives with id 0.
pub struct JsonEntityStore<M> {
    inner: Arc<RwLock<HashMap<i64, M>>>,
    file_path: PathBuf,
}

impl<M> JsonEntityStore<M>
where
    M: CatalogEntity + Clone + serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
{
    /// Initialize the store from a path. Creates the file with an empty map
    /// if missing or unreadable.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<i64, M> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<i64, M> = HashMap::new();
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?,
                )
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self {
            inner: Arc::new(RwLock::new(map)),
            file_path,
        }))
    }

    async fn flush(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl<M> Repository<M> for JsonEntityStore<M>
where
    M: CatalogEntity + Clone + serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
{
    async fn list(&self) -> Result<Vec<M>, ServiceError> {
        let map = self.inner.read().await;
        let mut all: Vec<M> = map.values().cloned().collect();
        all.sort_by_key(|m| m.id());
        Ok(all)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<M>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<M>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.values().find(|m| m.name() == name).cloned())
    }

    async fn create(&self, mut entity: M) -> Result<M, ServiceError> {
        let mut map = self.inner.write().await;
        if entity.id() == 0 {
            let next = map.keys().max().copied().unwrap_or(0) + 1;
            entity.set_id(next);
        } else if map.contains_key(&entity.id()) {
            return Err(ServiceError::Storage(format!(
                "id {} already exists",
                entity.id()
            )));
        }
        map.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: M) -> Result<M, ServiceError> {
        let mut map = self.inner.write().await;
        if !map.contains_key(&entity.id()) {
            return Err(ServiceError::not_found(&format!("id {}", entity.id())));
        }
        map.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, entity: &M) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        if map.remove(&entity.id()).is_none() {
            return Err(ServiceError::not_found(&format!("id {}", entity.id())));
        }
        Ok(())
    }

    async fn commit(&self) -> Result<(), ServiceError> {
        self.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Brand;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("entity_store_{}_{}.json", tag, uuid::Uuid::new_v4()))
    }

    fn brand(name: &str) -> Brand {
        Brand { id: 0, name: name.into(), description: None }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() -> Result<(), anyhow::Error> {
        let tmp = temp_path("ids");
        let store = JsonEntityStore::<Brand>::new(&tmp).await?;

        let a = store.create(brand("Acme")).await?;
        let b = store.create(brand("Borg")).await?;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        assert_eq!(store.get_by_name("Borg").await?.unwrap().id, 2);
        assert!(store.get_by_name("nope").await?.is_none());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn mutations_are_durable_only_after_commit() -> Result<(), anyhow::Error> {
        let tmp = temp_path("commit");
        let store = JsonEntityStore::<Brand>::new(&tmp).await?;

        store.create(brand("Acme")).await?;

        // Not flushed yet: a fresh load sees nothing.
        let before = JsonEntityStore::<Brand>::new(&tmp).await?;
        assert!(before.list().await?.is_empty());

        store.commit().await?;
        let after = JsonEntityStore::<Brand>::new(&tmp).await?;
        assert_eq!(after.list().await?.len(), 1);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() -> Result<(), anyhow::Error> {
        let tmp = temp_path("update");
        let store = JsonEntityStore::<Brand>::new(&tmp).await?;

        let ghost = Brand { id: 99, name: "Ghost".into(), description: None };
        let err = store.update(ghost).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        // And nothing was created as a side effect.
        assert!(store.get_by_id(99).await?.is_none());

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
