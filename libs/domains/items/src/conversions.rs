//! Stored document -> public entity shaping

use crate::models::{Item, ItemDocument};

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        to_entity(doc)
    }
}

/// Rename `_id` to `id` and render it as a hex string; other fields pass through.
pub fn to_entity(doc: ItemDocument) -> Item {
    Item {
        id: Some(doc.id.to_hex()),
        name: doc.name,
        amount: doc.amount,
        price: doc.price,
        cost: doc.cost,
    }
}

/// [`to_entity`] over a sequence, preserving order.
pub fn to_entity_list<I>(docs: I) -> Vec<Item>
where
    I: IntoIterator<Item = ItemDocument>,
{
    docs.into_iter().map(to_entity).collect()
}
