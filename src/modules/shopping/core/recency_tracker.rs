// Capacity-bounded, identity-deduplicated "recently viewed" history.
//
// Ordering
// - Histories are ordered newest first. Index 0 is the most recent view.
//
// Boundaries
// - Pure. The caller supplies `now` and the capacity, and persists the returned sequence.

use crate::modules::shopping::core::product::{Product, ProductId};
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;

/// Record a view of `viewed` at `now`.
///
/// A product already in the history is moved to the front with its timestamp refreshed, so the
/// history does not grow. Otherwise a new entry is inserted at the front. Entries past
/// `capacity` are evicted from the oldest end.
pub fn record_view(
    history: &[RecentlyViewedEntry],
    viewed: &Product,
    now: i64,
    capacity: usize,
) -> Vec<RecentlyViewedEntry> {
    let mut next = Vec::with_capacity(history.len() + 1);
    next.push(RecentlyViewedEntry::new(now, viewed.clone()));
    next.extend(
        history
            .iter()
            .filter(|entry| !entry.product.is_same_product(viewed))
            .cloned(),
    );
    next.truncate(capacity);
    next
}

pub fn latest(history: &[RecentlyViewedEntry]) -> Option<&RecentlyViewedEntry> {
    history.first()
}

pub fn is_latest(history: &[RecentlyViewedEntry], product: &Product) -> bool {
    latest(history).is_some_and(|entry| entry.product.is_same_product(product))
}

/// Products present in `before` that did not survive into `after`.
pub fn evicted_product_ids(
    before: &[RecentlyViewedEntry],
    after: &[RecentlyViewedEntry],
) -> Vec<ProductId> {
    before
        .iter()
        .map(|entry| entry.product.id)
        .filter(|id| !after.iter().any(|entry| entry.product.id == *id))
        .collect()
}
