// Open a product's detail view and record the view in the recency history.
//
// Flow
// - Read the stored history. If the product is already the latest entry, navigate with no
//   previous product and write nothing.
// - Otherwise record the view, persist the new head (update when the product is stored,
//   insert when not), delete evicted entries, then navigate showing the previous latest product.
//
// Failures
// - A failed history read is a load failure and stops the navigation.
// - A failed write is swallowed: navigation still happens and recency_changed is not sent.

use crate::modules::shopping::adapters::outbound::recency_store::RecencyStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::product::Product;
use crate::modules::shopping::core::recency_tracker::{
    evicted_product_ids, is_latest, latest, record_view,
};
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::modules::shopping::use_cases::errors::{ApplicationError, Settlement};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedProduct {
    pub previous: Option<Product>,
    pub history: Settlement<Vec<RecentlyViewedEntry>>,
}

pub struct OpenProductHandler<TRecency>
where
    TRecency: RecencyStore + Send + Sync + 'static,
{
    recency: Arc<TRecency>,
    capacity: usize,
}

impl<TRecency> OpenProductHandler<TRecency>
where
    TRecency: RecencyStore + Send + Sync + 'static,
{
    pub fn new(recency: Arc<TRecency>, capacity: usize) -> Self {
        Self { recency, capacity }
    }

    pub async fn handle(
        &self,
        view: &dyn ShoppingView,
        product: &Product,
        now: i64,
    ) -> Result<OpenedProduct, ApplicationError> {
        let history = match self.recency.get_all().await {
            Ok(history) => history,
            Err(error) => {
                warn!(product_id = product.id, %error, "recency history unavailable");
                view.load_failed().await;
                return Err(error.into());
            }
        };

        if is_latest(&history, product) {
            debug!(product_id = product.id, "reopened the latest product");
            view.detail_requested(product.clone(), None).await;
            return Ok(OpenedProduct {
                previous: None,
                history: Settlement::Applied(history),
            });
        }

        let previous = latest(&history).map(|entry| entry.product.clone());
        let next = record_view(&history, product, now, self.capacity);
        let history = match self.persist(&history, &next).await {
            Ok(()) => {
                view.recency_changed(next.clone()).await;
                Settlement::Applied(next)
            }
            Err(error) => {
                warn!(product_id = product.id, %error, "recording the view failed");
                Settlement::Swallowed(error)
            }
        };

        view.detail_requested(product.clone(), previous.clone()).await;
        Ok(OpenedProduct { previous, history })
    }

    async fn persist(
        &self,
        before: &[RecentlyViewedEntry],
        after: &[RecentlyViewedEntry],
    ) -> Result<(), ApplicationError> {
        let Some(head) = after.first() else {
            return Ok(());
        };
        if self.recency.exists(head.product.id).await {
            self.recency.update(head.clone()).await?;
        } else {
            self.recency.insert(head.clone()).await?;
        }
        for product_id in evicted_product_ids(before, after) {
            debug!(product_id, "evicting from recency history");
            self.recency.delete(product_id).await?;
        }
        Ok(())
    }
}
