use crate::modules::shopping::adapters::outbound::cart_store_in_memory::InMemoryCartStore;
use crate::modules::shopping::adapters::outbound::catalog_store_in_memory::InMemoryCatalogStore;
use crate::modules::shopping::adapters::outbound::recency_store_in_memory::InMemoryRecencyStore;
use crate::modules::shopping::core::product::{Product, ProductId};
use crate::modules::shopping::orchestrator::{OrchestratorSettings, ReconciliationOrchestrator};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::warn;

pub type ShoppingOrchestrator =
    ReconciliationOrchestrator<InMemoryCatalogStore, InMemoryCartStore, InMemoryRecencyStore>;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ShoppingOrchestrator>,
    pub catalog: Arc<InMemoryCatalogStore>,
    pub cart: Arc<InMemoryCartStore>,
    pub recency: Arc<InMemoryRecencyStore>,
}

impl AppState {
    pub fn in_memory(products: Vec<Product>, settings: OrchestratorSettings) -> Self {
        let catalog = Arc::new(InMemoryCatalogStore::with_products(products));
        let cart = Arc::new(InMemoryCartStore::new());
        let recency = Arc::new(InMemoryRecencyStore::new());
        let orchestrator = Arc::new(ReconciliationOrchestrator::new(
            catalog.clone(),
            cart.clone(),
            recency.clone(),
            settings,
        ));
        Self {
            orchestrator,
            catalog,
            cart,
            recency,
        }
    }

    /// Resolve a path product id. Unknown ids are 404.
    pub async fn product(&self, product_id: ProductId) -> Result<Product, StatusCode> {
        match self.orchestrator.find_product(product_id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(StatusCode::NOT_FOUND),
            Err(error) => {
                warn!(product_id, %error, "product lookup failed");
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
