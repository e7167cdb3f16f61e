use thiserror::Error;

/// Failures reported by the catalog, cart and recency stores.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed record does not exist. Callers treat this as "nothing to patch or remove".
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Network or persistence layer failure. Never retried.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
