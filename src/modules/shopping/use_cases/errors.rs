use crate::shared::infrastructure::store_error::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request the cart rules refuse before any store call, e.g. adding zero items.
    #[error("rejected: {0}")]
    Rejected(String),
}

impl ApplicationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Store(error) if error.is_not_found())
    }
}

/// Outcome of an operation whose failures are intentionally not surfaced to the view.
///
/// A `Swallowed` failure left the displayed state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement<T> {
    Applied(T),
    Swallowed(ApplicationError),
}

impl<T> Settlement<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Settlement::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Settlement::Applied(value) => Some(value),
            Settlement::Swallowed(_) => None,
        }
    }
}

/// A cart mutation the store accepted, with the count refresh that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartMutation<T> {
    pub outcome: T,
    /// `None` when nothing was written and no refresh was issued.
    pub count: Option<Settlement<u32>>,
}

impl<T> CartMutation<T> {
    pub fn refreshed(outcome: T, count: Settlement<u32>) -> Self {
        Self {
            outcome,
            count: Some(count),
        }
    }

    pub fn unrefreshed(outcome: T) -> Self {
        Self {
            outcome,
            count: None,
        }
    }

    pub fn is_count_swallowed(&self) -> bool {
        matches!(self.count, Some(Settlement::Swallowed(_)))
    }
}
