// Incremental catalog loading for the catalog list view.
//
// Responsibilities
// - Own the PaginatedLoader. Its lock is held across the fetch, so overlapping loads run one
//   after the other and never interleave their bookkeeping.
// - Project every fetched product onto its current cart quantity.
// - Commit the loader only after a successful fetch. A failure notifies load_failed and keeps
//   the displayed list and loaded_count as they were.

use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::catalog_store::CatalogStore;
use crate::modules::shopping::adapters::outbound::view::ShoppingView;
use crate::modules::shopping::core::paginated_loader::{PageRequest, PaginatedLoader};
use crate::modules::shopping::core::shopping_product::{ShoppingProductProjection, project};
use crate::modules::shopping::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::store_error::StoreError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub request: PageRequest,
    pub products: Vec<ShoppingProductProjection>,
    /// Fewer products than requested came back. The view stops offering load-more.
    pub is_end_of_catalog: bool,
}

pub struct LoadCatalogHandler<TCatalog, TCart>
where
    TCatalog: CatalogStore + Send + Sync + 'static,
    TCart: CartStore + Send + Sync + 'static,
{
    catalog: Arc<TCatalog>,
    cart: Arc<TCart>,
    loader: Mutex<PaginatedLoader>,
}

impl<TCatalog, TCart> LoadCatalogHandler<TCatalog, TCart>
where
    TCatalog: CatalogStore + Send + Sync + 'static,
    TCart: CartStore + Send + Sync + 'static,
{
    pub fn new(catalog: Arc<TCatalog>, cart: Arc<TCart>, page_size: usize) -> Self {
        Self {
            catalog,
            cart,
            loader: Mutex::new(PaginatedLoader::new(page_size)),
        }
    }

    pub async fn loaded_count(&self) -> usize {
        self.loader.lock().await.loaded_count()
    }

    /// First open, or return to the catalog: restores the window loaded so far.
    pub async fn load_initial(&self, view: &dyn ShoppingView) -> Result<CatalogPage, ApplicationError> {
        let mut loader = self.loader.lock().await;
        let page = self.fetch(view, loader.initial_load()).await?;
        loader.initial_loaded(page.products.len());
        view.products_replaced(page.products.clone()).await;
        Ok(page)
    }

    pub async fn load_more(&self, view: &dyn ShoppingView) -> Result<CatalogPage, ApplicationError> {
        let mut loader = self.loader.lock().await;
        let page = self.fetch(view, loader.load_more()).await?;
        loader.more_loaded(page.products.len());
        view.products_appended(page.products.clone()).await;
        Ok(page)
    }

    /// Drop the window and load the first page again.
    pub async fn reload(&self, view: &dyn ShoppingView) -> Result<CatalogPage, ApplicationError> {
        let mut loader = self.loader.lock().await;
        let mut next = *loader;
        next.reset();
        let page = self.fetch(view, next.initial_load()).await?;
        next.initial_loaded(page.products.len());
        *loader = next;
        view.products_replaced(page.products.clone()).await;
        Ok(page)
    }

    async fn fetch(
        &self,
        view: &dyn ShoppingView,
        request: PageRequest,
    ) -> Result<CatalogPage, ApplicationError> {
        match self.read_page(request).await {
            Ok(products) => {
                debug!(
                    offset = request.offset,
                    limit = request.limit,
                    returned = products.len(),
                    "catalog page loaded"
                );
                Ok(CatalogPage {
                    request,
                    is_end_of_catalog: request.is_end_of_catalog(products.len()),
                    products,
                })
            }
            Err(error) => {
                warn!(offset = request.offset, limit = request.limit, %error, "catalog load failed");
                view.load_failed().await;
                Err(error.into())
            }
        }
    }

    async fn read_page(&self, request: PageRequest) -> Result<Vec<ShoppingProductProjection>, StoreError> {
        let products = self.catalog.fetch_page(request.offset, request.limit).await?;
        let line_items = self.cart.list_line_items().await?;
        Ok(project(products, &line_items))
    }
}
