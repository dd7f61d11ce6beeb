//! Item Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::conversions::{to_entity, to_entity_list};
use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Each operation maps onto one or two repository round-trips. Raw store
/// failures leave the service as [`ItemError::Internal`] carrying the
/// operation context; domain failures pass through untouched.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item. The name must not be in use yet.
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: Item) -> ItemResult<Item> {
        // Check and insert are separate round-trips; concurrent creates may race
        if self
            .repository
            .find_by_name(&input.name)
            .await
            .map_err(|e| e.with_context("error inserting item"))?
            .is_some()
        {
            return Err(ItemError::AlreadyExists);
        }

        let created = async {
            let id = self.repository.insert(input.into_fields()).await?;
            self.repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| ItemError::Internal("inserted item not found".to_string()))
        }
        .await
        .map_err(|e| match e {
            ItemError::Internal(msg) => ItemError::Internal(format!("error inserting item: {msg}")),
            other => other.with_context("error inserting item"),
        })?;

        tracing::info!(item_id = %created.id, "Item created");
        Ok(to_entity(created))
    }

    /// List every item in the store's natural order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        let docs = self
            .repository
            .find_all()
            .await
            .map_err(|e| e.with_context("error fetching items"))?;
        Ok(to_entity_list(docs))
    }

    /// Get an item by exact name
    #[instrument(skip(self))]
    pub async fn get_item_by_name(&self, name: &str) -> ItemResult<Item> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(|e| e.with_context("error fetching item"))?
            .map(to_entity)
            .ok_or(ItemError::NotFound)
    }

    /// Overwrite the writable fields of the item with `id`.
    ///
    /// A client-supplied `id` in `input` is ignored.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: &str, input: Item) -> ItemResult<Item> {
        let oid = parse_id(id).ok_or(ItemError::NotFoundToUpdate)?;

        let context = |e: ItemError| e.with_context("error updating item");
        let matched = self
            .repository
            .update(oid, input.into_fields())
            .await
            .map_err(context)?;
        if matched == 0 {
            return Err(ItemError::NotFoundToUpdate);
        }

        let updated = self
            .repository
            .find_by_id(oid)
            .await
            .map_err(context)?
            .ok_or(ItemError::NotFoundToUpdate)?;

        tracing::info!(item_id = %oid, "Item updated");
        Ok(to_entity(updated))
    }

    /// Delete the item with `id`, returning it as it was before deletion
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<Item> {
        let oid = parse_id(id).ok_or(ItemError::NotFoundToDelete)?;

        let context = |e: ItemError| e.with_context("error deleting item");
        let snapshot = self
            .repository
            .find_by_id(oid)
            .await
            .map_err(context)?
            .ok_or(ItemError::NotFoundToDelete)?;

        let deleted = self.repository.delete(oid).await.map_err(context)?;
        if deleted == 0 {
            // Lost a race with another delete; the snapshot is still reported
            tracing::warn!(item_id = %oid, "Item vanished before delete");
        } else {
            tracing::info!(item_id = %oid, "Item deleted");
        }

        Ok(to_entity(snapshot))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Identifiers that are not valid ObjectIds cannot match any item.
fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}
