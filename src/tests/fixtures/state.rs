// Shared application state for inbound HTTP tests. Compiled only for tests.

use crate::modules::shopping::orchestrator::OrchestratorSettings;
use crate::shell::state::AppState;
use crate::tests::fixtures::products::make_catalog;

pub const CATALOG_SIZE: i64 = 45;

pub const TEST_SETTINGS: OrchestratorSettings = OrchestratorSettings {
    page_size: 20,
    recent_capacity: 3,
    cart_page_size: 5,
};

pub fn make_test_state() -> AppState {
    AppState::in_memory(make_catalog(CATALOG_SIZE), TEST_SETTINGS)
}
