use crate::modules::shopping::adapters::outbound::cart_store::CartStore;
use crate::modules::shopping::adapters::outbound::cart_store_in_memory::InMemoryCartStore;
use crate::modules::shopping::adapters::outbound::catalog_store_in_memory::InMemoryCatalogStore;
use crate::modules::shopping::adapters::outbound::recency_store::RecencyStore;
use crate::modules::shopping::adapters::outbound::recency_store_in_memory::InMemoryRecencyStore;
use crate::modules::shopping::adapters::outbound::view_recording::{RecordingView, ViewEvent};
use crate::modules::shopping::core::quantity_dialog::QuantityDialog;
use crate::modules::shopping::core::recently_viewed::RecentlyViewedEntry;
use crate::modules::shopping::orchestrator::{OrchestratorSettings, ReconciliationOrchestrator};
use crate::modules::shopping::use_cases::add_to_cart::command::AddToCart;
use crate::modules::shopping::use_cases::change_quantity::handler::QuantityOutcome;
use crate::modules::shopping::use_cases::errors::{ApplicationError, CartMutation, Settlement};
use crate::shared::infrastructure::store_error::StoreError;
use crate::tests::fixtures::products::{make_catalog, make_product};
use std::sync::Arc;

type Orchestrator =
    ReconciliationOrchestrator<InMemoryCatalogStore, InMemoryCartStore, InMemoryRecencyStore>;

struct World {
    cart: Arc<InMemoryCartStore>,
    recency: Arc<InMemoryRecencyStore>,
    orchestrator: Orchestrator,
    view: RecordingView,
}

fn world(recent_capacity: usize) -> World {
    let catalog = Arc::new(InMemoryCatalogStore::with_products(make_catalog(45)));
    let cart = Arc::new(InMemoryCartStore::new());
    let recency = Arc::new(InMemoryRecencyStore::new());
    let orchestrator = ReconciliationOrchestrator::new(
        catalog,
        cart.clone(),
        recency.clone(),
        OrchestratorSettings {
            page_size: 20,
            recent_capacity,
            cart_page_size: 2,
        },
    );
    World {
        cart,
        recency,
        orchestrator,
        view: RecordingView::new(),
    }
}

#[tokio::test]
async fn adds_a_product_to_an_empty_cart() {
    let w = world(10);
    let product = make_product(1);

    let mutation = w
        .orchestrator
        .add_to_cart(&w.view, AddToCart::from(&QuantityDialog::open(product.clone(), 1)))
        .await
        .unwrap();

    assert_eq!(mutation.outcome.quantity, 1);
    assert_eq!(mutation.count, Some(Settlement::Applied(1)));
    let events = w.view.take().await;
    assert!(events.contains(&ViewEvent::LineItemQuantityChanged {
        product: product.clone(),
        quantity: 1
    }));
    assert_eq!(events.last(), Some(&ViewEvent::CartCountChanged { count: 1 }));

    let page = w.orchestrator.load_initial(&w.view).await.unwrap();
    assert_eq!(page.products[0].quantity, 1);
}

#[tokio::test]
async fn increases_a_checked_line_item_from_the_catalog_list() {
    let w = world(10);
    let product = make_product(1);
    w.cart.create_line_item(&product, 3).await.unwrap();

    let settlement = w.orchestrator.increase(&w.view, &product).await;

    assert_eq!(
        settlement,
        Settlement::Applied(CartMutation::refreshed(
            QuantityOutcome::Changed(4),
            Settlement::Applied(1)
        ))
    );
    let stored = w.cart.find_line_item(1).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 4);
    assert!(stored.is_checked);
    assert_eq!(
        w.view.events().await[0],
        ViewEvent::LineItemQuantityChanged {
            product,
            quantity: 4
        }
    );
}

#[tokio::test]
async fn evicts_the_oldest_view_when_the_history_is_full() {
    let w = world(3);
    for id in 1..=3 {
        w.orchestrator
            .open_product(&w.view, &make_product(id), id)
            .await
            .unwrap();
    }

    let opened = w
        .orchestrator
        .open_product(&w.view, &make_product(4), 4)
        .await
        .unwrap();

    assert_eq!(opened.previous, Some(make_product(3)));
    let history = w.recency.get_all().await.unwrap();
    assert_eq!(
        history,
        vec![
            RecentlyViewedEntry::new(4, make_product(4)),
            RecentlyViewedEntry::new(3, make_product(3)),
            RecentlyViewedEntry::new(2, make_product(2)),
        ]
    );
    assert_eq!(w.orchestrator.refresh_recency(&w.view).await.unwrap(), history);
}

#[tokio::test]
async fn pages_through_the_catalog_and_starts_over_on_reload() {
    let w = world(10);

    w.orchestrator.load_initial(&w.view).await.unwrap();
    w.orchestrator.load_more(&w.view).await.unwrap();
    assert_eq!(w.orchestrator.loaded_count().await, 40);

    let last = w.orchestrator.load_more(&w.view).await.unwrap();
    assert!(last.is_end_of_catalog);

    let reloaded = w.orchestrator.reload(&w.view).await.unwrap();
    assert_eq!(reloaded.request.limit, 20);
    assert_eq!(w.orchestrator.loaded_count().await, 20);
}

#[tokio::test]
async fn keeps_the_cart_mutation_when_the_count_cannot_be_refreshed() {
    let w = world(10);
    let product = make_product(7);
    w.cart.toggle_count_offline();

    let settlement = w.orchestrator.increase(&w.view, &product).await;
    assert_eq!(
        settlement,
        Settlement::Applied(CartMutation::refreshed(
            QuantityOutcome::Changed(1),
            Settlement::Swallowed(ApplicationError::Store(StoreError::Transport(
                "Cart count offline".into()
            )))
        ))
    );
    assert!(!w.orchestrator.refresh_cart_count(&w.view).await.is_applied());

    w.cart.toggle_count_offline();
    assert_eq!(w.orchestrator.refresh_cart_count(&w.view).await, Settlement::Applied(1));
}

#[tokio::test]
async fn edits_the_cart_from_the_cart_screen() {
    let w = world(10);
    w.orchestrator
        .add_to_cart(
            &w.view,
            AddToCart {
                product: make_product(1),
                quantity: 1,
            },
        )
        .await
        .unwrap();
    let page = w.orchestrator.show_cart(&w.view).await.unwrap();

    w.orchestrator
        .set_all_checked(&w.view, false)
        .await
        .unwrap();
    let mutation = w
        .orchestrator
        .decrease_line_item(&w.view, &page.line_items[0])
        .await
        .unwrap();

    assert_eq!(mutation.outcome, QuantityOutcome::Removed);
    assert!(w.orchestrator.show_cart(&w.view).await.unwrap().line_items.is_empty());
    assert_eq!(w.orchestrator.find_line_item(1).await.unwrap(), None);
}

#[tokio::test]
async fn pages_the_cart_screen_and_orders_the_checked_items() {
    let w = world(10);
    for id in 1..=3 {
        w.orchestrator
            .add_to_cart(
                &w.view,
                AddToCart {
                    product: make_product(id),
                    quantity: 2,
                },
            )
            .await
            .unwrap();
    }

    let first = w.orchestrator.show_cart(&w.view).await.unwrap();
    assert_eq!(first.line_items.len(), 2);
    assert!(first.navigation.is_visible);
    assert!(first.is_all_checked);
    assert_eq!(first.checked_quantity, 6);

    let second = w.orchestrator.next_cart_page(&w.view).await.unwrap();
    assert_eq!(second.line_items[0].product, make_product(3));
    assert!(second.navigation.is_last_page);

    w.orchestrator
        .set_checked(&w.view, &second.line_items[0], false)
        .await
        .unwrap();
    let back = w.orchestrator.previous_cart_page(&w.view).await.unwrap();
    assert!(!back.is_all_checked);
    assert_eq!(back.checked_quantity, 4);

    w.view.take().await;
    let ids = w.orchestrator.order(&w.view).await.unwrap();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(
        w.view.events().await,
        vec![ViewEvent::OrderRequested { line_item_ids: ids }]
    );
}
