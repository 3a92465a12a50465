use std::{
    collections::{BTreeSet, HashMap},
    path::PathBuf,
    sync::Arc,
};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;
use crate::repository::LinkRepository;

/// JSON file-backed store for many-to-many link rows, keyed by owner id.
///
/// Each add/remove call is one durable unit: the file is rewritten after the
/// in-memory map changes. Links are kept as a set, so re-adding an existing
/// pair and removing a missing pair are both no-ops.
pub struct JsonLinkStore {
    inner: Arc<RwLock<HashMap<i64, BTreeSet<i64>>>>,
    file_path: PathBuf,
}

impl JsonLinkStore {
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<i64, BTreeSet<i64>> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };

        Ok(Arc::new(Self {
            inner: Arc::new(RwLock::new(map)),
            file_path,
        }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for JsonLinkStore {
    async fn add_links(&self, owner_id: i64, related: &[i64]) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.entry(owner_id).or_default().extend(related.iter().copied());
        drop(map);
        self.save().await
    }

    async fn remove_links(&self, owner_id: i64, related: &[i64]) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        if let Some(set) = map.get_mut(&owner_id) {
            for id in related {
                set.remove(id);
            }
        }
        drop(map);
        self.save().await
    }

    async fn links_of(&self, owner_id: i64) -> Result<Vec<i64>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map
            .get(&owner_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default())
    }
}
