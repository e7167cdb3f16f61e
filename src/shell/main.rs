use tracing_subscriber::{EnvFilter, fmt};

use shopping_core::modules::shopping::orchestrator::OrchestratorSettings;
use shopping_core::shell::config::ShoppingConfig;
use shopping_core::shell::http::router;
use shopping_core::shell::seed::seed_catalog;
use shopping_core::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ShoppingConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    // In-memory stores for now
    let state = AppState::in_memory(seed_catalog(), OrchestratorSettings::from(&config));
    let app = router(state);

    let addr = config.socket_addr();
    tracing::info!(
        page_size = config.page_size,
        recent_capacity = config.recent_capacity,
        cart_page_size = config.cart_page_size,
        "shopping endpoint: http://{}",
        addr
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
