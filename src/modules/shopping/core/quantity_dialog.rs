// Local state of the modal "add to cart" quantity dialog.
//
// The dialog never reaches the store while it is open. Its quantity starts at 1 or more and
// decreasing at 1 is refused. The confirmed quantity becomes an AddToCart command.

use crate::modules::shopping::core::cart_line_item::CartLineItem;
use crate::modules::shopping::core::cart_reconciler::{
    propose_decrease, propose_increase, QuantityProposal, DIALOG_FLOOR,
};
use crate::modules::shopping::core::product::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityDialog {
    draft: CartLineItem,
}

impl QuantityDialog {
    pub fn open(product: Product, quantity: u32) -> Self {
        Self {
            draft: CartLineItem::unpersisted(product, quantity.max(DIALOG_FLOOR)),
        }
    }

    pub fn product(&self) -> &Product {
        &self.draft.product
    }

    pub fn quantity(&self) -> u32 {
        self.draft.quantity
    }

    pub fn increase(&mut self) -> u32 {
        self.draft = propose_increase(&self.draft);
        self.draft.quantity
    }

    /// Returns false when the dialog is already at its floor.
    pub fn decrease(&mut self) -> bool {
        match propose_decrease(&self.draft, DIALOG_FLOOR) {
            QuantityProposal::Patch(next) => {
                self.draft = next;
                true
            }
            QuantityProposal::Removal(_) | QuantityProposal::Unchanged(_) => false,
        }
    }
}
