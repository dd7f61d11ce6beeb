use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ItemResult;
use crate::models::{ItemDocument, ItemFields};

/// Document store operations the item service needs.
///
/// Every method is a single store round-trip. Failures are reported as
/// [`ItemError::Database`](crate::ItemError::Database); the service adds the
/// operation context.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find one item by exact name
    async fn find_by_name(&self, name: &str) -> ItemResult<Option<ItemDocument>>;

    /// Find one item by identifier
    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Option<ItemDocument>>;

    /// All items, in the store's natural order
    async fn find_all(&self) -> ItemResult<Vec<ItemDocument>>;

    /// Insert a new item and return its store-assigned identifier
    async fn insert(&self, fields: ItemFields) -> ItemResult<ObjectId>;

    /// Overwrite the fields of the item with `id`; returns the matched count
    async fn update(&self, id: ObjectId, fields: ItemFields) -> ItemResult<u64>;

    /// Delete the item with `id`; returns the deleted count
    async fn delete(&self, id: ObjectId) -> ItemResult<u64>;
}
