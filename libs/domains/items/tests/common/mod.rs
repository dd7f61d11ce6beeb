//! In-memory ItemRepository for handler tests

use async_trait::async_trait;
use domain_items::{ItemDocument, ItemError, ItemFields, ItemRepository, ItemResult};
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

/// Vec-backed store keeping insertion order, like a collection's natural order.
#[derive(Default)]
pub struct InMemoryItemRepository {
    docs: Mutex<Vec<ItemDocument>>,
    fail_with: Option<String>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose every call fails with a store error
    pub fn failing(cause: &str) -> Self {
        Self {
            docs: Mutex::default(),
            fail_with: Some(cause.to_string()),
        }
    }

    fn check(&self) -> ItemResult<()> {
        match &self.fail_with {
            Some(cause) => Err(ItemError::Database(cause.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_by_name(&self, name: &str) -> ItemResult<Option<ItemDocument>> {
        self.check()?;
        let docs = self.docs.lock().unwrap();
        Ok(docs.iter().find(|d| d.name == name).cloned())
    }

    async fn find_by_id(&self, id: ObjectId) -> ItemResult<Option<ItemDocument>> {
        self.check()?;
        let docs = self.docs.lock().unwrap();
        Ok(docs.iter().find(|d| d.id == id).cloned())
    }

    async fn find_all(&self) -> ItemResult<Vec<ItemDocument>> {
        self.check()?;
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn insert(&self, fields: ItemFields) -> ItemResult<ObjectId> {
        self.check()?;
        let id = ObjectId::new();
        self.docs.lock().unwrap().push(fields.with_id(id));
        Ok(id)
    }

    async fn update(&self, id: ObjectId, fields: ItemFields) -> ItemResult<u64> {
        self.check()?;
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                *doc = fields.with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ObjectId) -> ItemResult<u64> {
        self.check()?;
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok((before - docs.len()) as u64)
    }
}
