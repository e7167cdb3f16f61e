use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::cart_store_in_memory::InMemoryCartStore;
use crate::modules::shopping::adapters::outbound::catalog_store_in_memory::InMemoryCatalogStore;
use crate::modules::shopping::adapters::outbound::recency_store_in_memory::InMemoryRecencyStore;
use crate::modules::shopping::adapters::outbound::view_recording::RecordingView;
use crate::modules::shopping::orchestrator::{OrchestratorSettings, ReconciliationOrchestrator};
use crate::modules::shopping::use_cases::add_to_cart::command::AddToCart;
use crate::tests::fixtures::products::{make_catalog, make_product};
use std::sync::Arc;
use tokio::join;

fn orchestrator(
    cart: Arc<InMemoryCartStore>,
) -> ReconciliationOrchestrator<InMemoryCatalogStore, InMemoryCartStore, InMemoryRecencyStore> {
    ReconciliationOrchestrator::new(
        Arc::new(InMemoryCatalogStore::with_products(make_catalog(5))),
        cart,
        Arc::new(InMemoryRecencyStore::new()),
        OrchestratorSettings {
            page_size: 20,
            recent_capacity: 10,
            cart_page_size: 5,
        },
    )
}

#[tokio::test]
async fn concurrent_taps_on_one_product_are_not_lost() {
    let cart = Arc::new(InMemoryCartStore::new());
    let orchestrator = orchestrator(cart.clone());
    let view = RecordingView::new();
    let product = make_product(1);
    cart.create_line_item(&product, 2).await.unwrap();
    cart.set_delay_read_ms(15);

    let (first, second, add) = join!(
        orchestrator.increase(&view, &product),
        orchestrator.increase(&view, &product),
        orchestrator.add_to_cart(
            &view,
            AddToCart {
                product: product.clone(),
                quantity: 3
            }
        )
    );

    assert!(first.is_applied() && second.is_applied() && add.is_ok());
    let line_items = cart.list_line_items().await.unwrap();
    assert_eq!(line_items.len(), 1);
    assert_eq!(line_items[0].quantity, 7);
}

#[tokio::test]
async fn concurrent_first_adds_create_a_single_line_item() {
    let cart = Arc::new(InMemoryCartStore::new());
    let orchestrator = orchestrator(cart.clone());
    let view = RecordingView::new();
    let product = make_product(2);
    cart.set_delay_read_ms(15);

    let (first, second) = join!(
        orchestrator.increase(&view, &product),
        orchestrator.increase(&view, &product)
    );

    assert!(first.is_applied() && second.is_applied());
    let line_items = cart.list_line_items().await.unwrap();
    assert_eq!(line_items.len(), 1);
    assert_eq!(line_items[0].quantity, 2);
}
