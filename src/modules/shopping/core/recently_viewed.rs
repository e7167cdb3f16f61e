// One "viewed" event, deduplicated by product identity.
//
// Timestamps
// - `viewed_at` is epoch milliseconds, like every other i64 time value in this crate.

use crate::modules::shopping::core::product::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentlyViewedEntry {
    pub viewed_at: i64,
    pub product: Product,
}

impl RecentlyViewedEntry {
    pub fn new(viewed_at: i64, product: Product) -> Self {
        Self { viewed_at, product }
    }
}
