use serde::{Deserialize, Serialize};

use crate::entity::{validate_name, CatalogEntity, TransferObject};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CatalogEntity for Category {
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

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TransferObject for CategoryDto {
    fn id(&self) -> i64 {
        self.id
    }

    fn validate(&self) -> Vec<String> {
        validate_name(&self.name)
    }
}
