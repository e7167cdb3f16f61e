use crate::modules::shopping::core::cart_line_item::CartLineItem;
use crate::modules::shopping::core::cart_reconciler::propose_add;
use crate::modules::shopping::use_cases::add_to_cart::command::AddToCart;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    /// Create the line item when it is unpersisted, patch its quantity otherwise.
    Accepted { line_item: CartLineItem },
    Rejected { reason: DecideError },
}

pub fn decide_add(existing: Option<&CartLineItem>, command: &AddToCart) -> Decision {
    if command.quantity == 0 {
        return Decision::Rejected {
            reason: DecideError::ZeroQuantity,
        };
    }
    Decision::Accepted {
        line_item: propose_add(existing, &command.product, command.quantity),
    }
}
