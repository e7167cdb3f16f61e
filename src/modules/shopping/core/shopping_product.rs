// Read-only composite of a catalog product and its current cart quantity.
//
// Derived for presentation only. Never stored as a source of truth.

use crate::modules::shopping::core::cart_line_item::CartLineItem;
use crate::modules::shopping::core::product::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingProductProjection {
    pub product: Product,
    pub quantity: u32,
}

/// Pair every product with the quantity of its line item, 0 when it is not in the cart.
pub fn project(products: Vec<Product>, line_items: &[CartLineItem]) -> Vec<ShoppingProductProjection> {
    products
        .into_iter()
        .map(|product| {
            let quantity = line_items
                .iter()
                .find(|line_item| line_item.product_id() == product.id)
                .map(|line_item| line_item.quantity)
                .unwrap_or(0);
            ShoppingProductProjection { product, quantity }
        })
        .collect()
}
