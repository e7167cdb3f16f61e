// Catalog product value.
//
// Purpose
// - Carry the immutable product snapshot shared by the cart, the recency history and the catalog.
//
// Notes
// - Identity is the `id` alone. Two snapshots with the same id are the same product even if
//   their display fields differ.
// - Prices are in the smallest currency unit.

use serde::{Deserialize, Serialize};

pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub image_url: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: u64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }

    pub fn is_same_product(&self, other: &Product) -> bool {
        self.id == other.id
    }
}
