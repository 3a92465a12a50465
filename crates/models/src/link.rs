use serde::{Deserialize, Serialize};

/// Many-to-many link row between a brand and a category.
///
/// Built transiently from an add-list when a create request is assembled;
/// persisted only through the dedicated addcat/remcat operations, never via
/// the generic CRUD path.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLink {
    pub brand_id: i64,
    pub category_id: i64,
}
