// Demo catalog served by the binary until a real product service is wired in.

use crate::modules::shopping::core::product::Product;

const NAMES: [&str; 6] = ["Apple", "Banana", "Carrot", "Daikon", "Eggplant", "Fig"];

pub const SEED_SIZE: i64 = 60;

pub fn seed_catalog() -> Vec<Product> {
    (1..=SEED_SIZE)
        .map(|id| {
            let name = NAMES[(id as usize - 1) % NAMES.len()];
            Product::new(
                id,
                format!("{name} #{id}"),
                250 * (1 + id.unsigned_abs() % 12),
                format!("https://images.example/catalog/{id}.jpg"),
            )
        })
        .collect()
}
