// Selection summary of the cart screen, computed over the whole cart rather than one page.

use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};

/// An empty cart is never all checked.
pub fn is_all_checked(line_items: &[CartLineItem]) -> bool {
    !line_items.is_empty() && line_items.iter().all(|item| item.is_checked)
}

/// Sum of the quantities the order would cover.
pub fn checked_quantity(line_items: &[CartLineItem]) -> u32 {
    line_items
        .iter()
        .filter(|item| item.is_checked)
        .map(|item| item.quantity)
        .sum()
}

pub fn checked_ids(line_items: &[CartLineItem]) -> Vec<LineItemId> {
    line_items
        .iter()
        .filter(|item| item.is_checked)
        .map(|item| item.id)
        .collect()
}
