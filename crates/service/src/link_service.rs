use std::sync::Arc;

use tracing::info;

use common::Envelope;
use models::{Brand, Category};

use crate::errors::ServiceError;
use crate::repository::{LinkRepository, Repository};

/// Dedicated add/remove operations for brand-category links, outside the
/// generic CRUD path. Adds verify that both ends of every link exist;
/// removes only require the owner.
pub struct LinkService<L, B, C> {
    links: Arc<L>,
    brands: Arc<B>,
    categories: Arc<C>,
}

impl<L, B, C> LinkService<L, B, C>
where
    L: LinkRepository,
    B: Repository<Brand>,
    C: Repository<Category>,
{
    pub fn new(links: Arc<L>, brands: Arc<B>, categories: Arc<C>) -> Self {
        Self { links, brands, categories }
    }

    /// Attach categories to a brand; returns the brand's full link list.
    /// One message per missing record, nothing attached unless all checks pass.
    pub async fn add(&self, brand_id: i64, category_ids: Vec<i64>) -> Envelope<Vec<i64>> {
        match self.check_add(brand_id, &category_ids).await {
            Ok(errors) if !errors.is_empty() => return Envelope::fail_all(errors),
            Err(e) => return Envelope::fail(e.to_string()),
            Ok(_) => {}
        }
        match self.apply_add(brand_id, &category_ids).await {
            Ok(current) => {
                info!(brand_id, added = category_ids.len(), "links added");
                Envelope::ok(current)
            }
            Err(e) => Envelope::fail(e.to_string()),
        }
    }

    async fn check_add(
        &self,
        brand_id: i64,
        category_ids: &[i64],
    ) -> Result<Vec<String>, ServiceError> {
        let mut errors = Vec::new();
        if self.brands.get_by_id(brand_id).await?.is_none() {
            errors.push(format!("brand {} not found", brand_id));
        }
        for &id in category_ids {
            if self.categories.get_by_id(id).await?.is_none() {
                errors.push(format!("category {} not found", id));
            }
        }
        Ok(errors)
    }

    async fn apply_add(&self, brand_id: i64, category_ids: &[i64]) -> Result<Vec<i64>, ServiceError> {
        self.links.add_links(brand_id, category_ids).await?;
        self.links.links_of(brand_id).await
    }

    /// Detach categories from a brand; detaching a pair that is not linked
    /// is a no-op. Returns the remaining link list.
    pub async fn remove(&self, brand_id: i64, category_ids: Vec<i64>) -> Envelope<Vec<i64>> {
        match self.brands.get_by_id(brand_id).await {
            Ok(None) => return Envelope::fail(format!("brand {} not found", brand_id)),
            Err(e) => return Envelope::fail(e.to_string()),
            Ok(Some(_)) => {}
        }
        match self.apply_remove(brand_id, &category_ids).await {
            Ok(current) => {
                info!(brand_id, removed = category_ids.len(), "links removed");
                Envelope::ok(current)
            }
            Err(e) => Envelope::fail(e.to_string()),
        }
    }

    async fn apply_remove(
        &self,
        brand_id: i64,
        category_ids: &[i64],
    ) -> Result<Vec<i64>, ServiceError> {
        self.links.remove_links(brand_id, category_ids).await?;
        self.links.links_of(brand_id).await
    }

    pub async fn links_of(&self, brand_id: i64) -> Result<Vec<i64>, ServiceError> {
        self.links.links_of(brand_id).await
    }
}
