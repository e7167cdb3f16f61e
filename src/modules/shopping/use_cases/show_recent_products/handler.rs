use crate::modules::shopping::adapters::outbound::recency_store::RecencyStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::modules::shopping::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::warn;

/// Refresh the "recently viewed" strip from the recency store, newest first.
pub struct ShowRecentProductsHandler<TRecency>
where
    TRecency: RecencyStore + Send + Sync + 'static,
{
    recency: Arc<TRecency>,
    capacity: usize,
}

impl<TRecency> ShowRecentProductsHandler<TRecency>
where
    TRecency: RecencyStore + Send + Sync + 'static,
{
    pub fn new(recency: Arc<TRecency>, capacity: usize) -> Self {
        Self { recency, capacity }
    }

    pub async fn handle(
        &self,
        view: &dyn ShoppingView,
    ) -> Result<Vec<RecentlyViewedEntry>, ApplicationError> {
        match self.recency.get_all().await {
            Ok(mut history) => {
                history.truncate(self.capacity);
                view.recency_changed(history.clone()).await;
                Ok(history)
            }
            Err(error) => {
                warn!(%error, "recency history unavailable");
                view.load_failed().await;
                Err(error.into())
            }
        }
    }
}
