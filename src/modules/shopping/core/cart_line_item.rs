// One product's presence in the cart.
//
// Invariants
// - quantity >= 1 while the line item exists. Zero is represented by deleting the line item.
// - At most one line item per product identity in a consistent cart.
// - `id` is assigned by the cart store. UNPERSISTED_LINE_ITEM_ID marks a line item that only
//   exists locally.

use crate::modules::shopping::core::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

pub type LineItemId = i64;

pub const UNPERSISTED_LINE_ITEM_ID: LineItemId = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub quantity: u32,
    pub is_checked: bool,
    pub product: Product,
}

impl CartLineItem {
    /// A new line item that the cart store has not seen yet. New items start checked.
    pub fn unpersisted(product: Product, quantity: u32) -> Self {
        Self {
            id: UNPERSISTED_LINE_ITEM_ID,
            quantity,
            is_checked: true,
            product,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNPERSISTED_LINE_ITEM_ID
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn with_checked(&self, is_checked: bool) -> Self {
        Self {
            is_checked,
            ..self.clone()
        }
    }
}
