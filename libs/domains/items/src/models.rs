use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item as exchanged over HTTP.
///
/// Used both as request body and response. On requests `id` is ignored:
/// identifiers are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Item {
    /// Store-assigned identifier (24 hex chars), null on input
    #[serde(default)]
    #[schema(example = "6650f1c2a3b4c5d6e7f80912")]
    pub id: Option<String>,
    /// Unique among items at creation time; may be empty
    #[schema(example = "widget")]
    pub name: String,
    #[schema(example = 5)]
    pub amount: i64,
    /// Unit price
    #[schema(example = 10)]
    pub price: i64,
    #[schema(example = 2.5)]
    pub cost: f64,
}

/// Item as stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub amount: i64,
    pub price: i64,
    pub cost: f64,
}

/// The writable part of an item: everything but the identifier.
///
/// This is the only shape ever sent to the store, for inserts and for `$set`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub amount: i64,
    pub price: i64,
    pub cost: f64,
}

impl Item {
    /// Drop the client-supplied identifier, keeping the writable fields.
    pub fn into_fields(self) -> ItemFields {
        ItemFields {
            name: self.name,
            amount: self.amount,
            price: self.price,
            cost: self.cost,
        }
    }
}

impl ItemFields {
    /// Attach a store identifier, producing the stored document shape.
    pub fn with_id(self, id: ObjectId) -> ItemDocument {
        ItemDocument {
            id,
            name: self.name,
            amount: self.amount,
            price: self.price,
            cost: self.cost,
        }
    }
}
