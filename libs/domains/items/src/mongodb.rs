//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{COLLECTION_NAME, CreateItem, Item};
use crate::repository::ItemRepository;

/// Stored shape of an item; `_id` is left to the server on insert
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    count: i64,
}

impl TryFrom<ItemDocument> for Item {
    type Error = ItemError;

    fn try_from(doc: ItemDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .ok_or_else(|| ItemError::Internal(format!("item '{}' has no _id", doc.name)))?;
        Ok(Item {
            id: id.to_hex(),
            name: doc.name,
            count: doc.count,
        })
    }
}

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Create a repository over the `items` collection of `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = client_from_config(&config).await?;
    /// let repo = MongoItemRepository::new(client.database("myapp"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    fn name_index() -> IndexModel {
        IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build()
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn ensure_indexes(&self) -> ItemResult<()> {
        let result = self.collection.create_index(Self::name_index()).await?;
        tracing::info!(index = %result.index_name, "Item indexes ready");
        Ok(())
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let doc = ItemDocument {
            id: None,
            name: input.name,
            count: input.count,
        };

        let result = match self.collection.insert_one(&doc).await {
            Ok(result) => result,
            Err(e) if is_duplicate_key(&e) => return Err(ItemError::DuplicateName(doc.name)),
            Err(e) => return Err(e.into()),
        };

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemError::Internal(format!("unexpected inserted _id: {}", result.inserted_id))
        })?;

        tracing::info!(item_id = %id, "Item created successfully");
        Ok(Item {
            id: id.to_hex(),
            name: doc.name,
            count: doc.count,
        })
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let docs: Vec<ItemDocument> = cursor.try_collect().await?;

        docs.into_iter().map(Item::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        self.collection
            .find_one(doc! { "name": name })
            .await?
            .map(Item::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn increment_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let updated = self
            .collection
            .find_one_and_update(doc! { "name": name }, doc! { "$inc": { "count": 1_i64 } })
            .return_document(ReturnDocument::After)
            .await?;

        if let Some(ref doc) = updated {
            tracing::info!(count = doc.count, "Item incremented");
        }

        updated.map(Item::try_from).transpose()
    }
}
