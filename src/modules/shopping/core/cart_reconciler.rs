// Pure quantity rules for a single cart line item.
//
// Purpose
// - Decide the next line item state for add, increase and decrease intents.
//
// Responsibilities
// - Merge-on-add: adding a product already in the cart raises the existing quantity.
// - Decrease respects a floor. The quantity dialog never goes below 1. The list editors
//   (catalog list and cart screen) signal Removal when the quantity would reach 0.
//
// Boundaries
// - No input or output. The caller reads the current line item from the cart store before
//   proposing, and issues the resulting store call.

use crate::modules::shopping::core::cart_line_item::CartLineItem;
use crate::modules::shopping::core::product::Product;

/// Floor of the modal quantity dialog: decreasing at 1 is refused.
pub const DIALOG_FLOOR: u32 = 1;

/// Floor of the list editors: decreasing at 1 removes the line item.
pub const LIST_FLOOR: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityProposal {
    /// Persist the line item with its new quantity.
    Patch(CartLineItem),
    /// Delete the line item from the cart store instead of patching it to 0.
    Removal(CartLineItem),
    /// Refused at the floor. Nothing reaches the store.
    Unchanged(CartLineItem),
}

pub fn propose_add(existing: Option<&CartLineItem>, product: &Product, quantity: u32) -> CartLineItem {
    match existing {
        Some(line_item) => line_item.with_quantity(line_item.quantity.saturating_add(quantity)),
        None => CartLineItem::unpersisted(product.clone(), quantity),
    }
}

pub fn propose_increase(current: &CartLineItem) -> CartLineItem {
    current.with_quantity(current.quantity.saturating_add(1))
}

pub fn propose_decrease(current: &CartLineItem, floor: u32) -> QuantityProposal {
    let next = current.quantity.saturating_sub(1);
    if next == 0 && floor == LIST_FLOOR {
        return QuantityProposal::Removal(current.clone());
    }
    if next >= floor && next > 0 {
        return QuantityProposal::Patch(current.with_quantity(next));
    }
    QuantityProposal::Unchanged(current.clone())
}
