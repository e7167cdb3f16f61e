// Shared product fixtures. Compiled only for tests.

use crate::modules::shopping::core::product::{Product, ProductId};

/// Canonical product for a given id. Name and price derive from the id so assertions stay readable.
pub fn make_product(id: ProductId) -> Product {
    Product::new(
        id,
        format!("product-{id:04}"),
        1_000 * id.unsigned_abs(),
        format!("https://images.example/products/{id}.png"),
    )
}

pub fn make_catalog(size: i64) -> Vec<Product> {
    (1..=size).map(make_product).collect()
}
