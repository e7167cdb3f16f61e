//! Runtime configuration of the shopping service.
//!
//! Loaded from environment variables prefixed `SHOPPING__`, after a `.env` file is read if
//! present:
//!
//! - `SHOPPING__PORT=8081` -> `port = 8081`
//! - `SHOPPING__PAGE_SIZE=50` -> `page_size = 50`
//! - `SHOPPING__CART_PAGE_SIZE=10` -> `cart_page_size = 10`

use crate::modules::shopping::orchestrator::OrchestratorSettings;
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "SHOPPING";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("Recently viewed capacity must be at least 1")]
    InvalidRecentCapacity,

    #[error("Cart page size must be at least 1")]
    InvalidCartPageSize,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShoppingConfig {
    pub host: String,
    pub port: u16,
    /// Catalog load-more increment.
    pub page_size: usize,
    /// Bound of the recently viewed history.
    pub recent_capacity: usize,
    /// Line items per cart screen page.
    pub cart_page_size: usize,
    /// Default tracing filter. `RUST_LOG` wins when set.
    pub log_filter: String,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            page_size: 20,
            recent_capacity: 10,
            cart_page_size: 5,
            log_filter: "info,shopping_core=debug".to_string(),
        }
    }
}

impl ShoppingConfig {
    /// Load and validate the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, ConfigError> {
        let config: Self = config::Config::builder()
            .add_source(environment.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.recent_capacity == 0 {
            return Err(ValidationError::InvalidRecentCapacity);
        }
        if self.cart_page_size == 0 {
            return Err(ValidationError::InvalidCartPageSize);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&ShoppingConfig> for OrchestratorSettings {
    fn from(config: &ShoppingConfig) -> Self {
        Self {
            page_size: config.page_size,
            recent_capacity: config.recent_capacity,
            cart_page_size: config.cart_page_size,
        }
    }
}
