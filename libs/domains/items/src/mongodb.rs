//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId, to_document},
};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{ItemDocument, ItemFields};
use crate::repository::ItemRepository;

/// Collection used when none is configured
pub const DEFAULT_COLLECTION: &str = "item";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Repository over the `item` collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ItemDocument>(collection_name),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<ItemDocument> {
        &self.collection
    }

    /// `$set` document touching exactly the writable fields.
    fn set_fields(fields: &ItemFields) -> ItemResult<mongodb::bson::Document> {
        Ok(doc! { "$set": to_document(fields)? })
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> ItemResult<Option<ItemDocument>> {
        Ok(self.collection.find_one(doc! { "name": name }).await?)
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Option<ItemDocument>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ItemResult<Vec<ItemDocument>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, fields), fields(item_name = %fields.name))]
    async fn insert(&self, fields: ItemFields) -> ItemResult<ObjectId> {
        // The typed collection would demand an `_id`; insert the id-less shape
        let result = self
            .collection
            .clone_with_type::<ItemFields>()
            .insert_one(&fields)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemError::Database(format!(
                "store returned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(item_id = %id, "Item inserted");
        Ok(id)
    }

    #[instrument(skip(self, fields), fields(item_id = %id))]
    async fn update(&self, id: ObjectId, fields: ItemFields) -> ItemResult<u64> {
        let update = Self::set_fields(&fields)?;
        let result = self.collection.update_one(doc! { "_id": id }, update).await?;

        tracing::info!(
            item_id = %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Item update applied"
        );
        Ok(result.matched_count)
    }

    #[instrument(skip(self), fields(item_id = %id))]
    async fn delete(&self, id: ObjectId) -> ItemResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        tracing::info!(item_id = %id, deleted = result.deleted_count, "Item delete applied");
        Ok(result.deleted_count)
    }
}
