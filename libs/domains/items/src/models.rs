use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Collection holding item documents
pub const COLLECTION_NAME: &str = "items";

/// Upper bound on the number of items a list call returns
pub const MAX_LIST_LIMIT: i64 = 100;

/// Item as stored and returned by read/increment endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned ObjectId, hex encoded
    #[serde(rename = "_id")]
    #[schema(example = "652f1c0e8b3e4a0012345678")]
    pub id: String,
    /// Unique item name
    #[schema(example = "ahmed")]
    pub name: String,
    /// Counter, never negative
    #[schema(example = 2000)]
    pub count: i64,
}

/// Body returned by a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedItem {
    #[schema(example = "652f1c0e8b3e4a0012345678")]
    pub id: String,
    #[schema(example = "ahmed")]
    pub name: String,
    #[schema(example = 2000)]
    pub count: i64,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1))]
    #[schema(example = "ahmed", min_length = 1)]
    pub name: String,
    #[validate(range(min = 0))]
    #[schema(example = 2000, minimum = 0)]
    pub count: i64,
}

impl From<Item> for CreatedItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            count: item.count,
        }
    }
}
