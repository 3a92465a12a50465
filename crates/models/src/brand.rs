use serde::{Deserialize, Serialize};

use crate::entity::{validate_name, CatalogEntity, TransferObject};
use crate::link::CategoryLink;

/// Persisted brand record. `id == 0` means not yet persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CatalogEntity for Brand {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wire shape for brands. Carries the relationship edit lists used by the
/// storefront edit flow; the lists never reach the generic CRUD path.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id_add: Vec<i64>,
    #[serde(default)]
    pub category_id_remove: Vec<i64>,
    #[serde(default)]
    pub category_links: Vec<CategoryLink>,
}

impl TransferObject for BrandDto {
    fn id(&self) -> i64 {
        self.id
    }

    fn validate(&self) -> Vec<String> {
        validate_name(&self.name)
    }
}
