use crate::modules::shopping::core::product::Product;
use crate::modules::shopping::core::quantity_dialog::QuantityDialog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCart {
    pub product: Product,
    pub quantity: u32,
}

impl From<&QuantityDialog> for AddToCart {
    fn from(dialog: &QuantityDialog) -> Self {
        Self {
            product: dialog.product().clone(),
            quantity: dialog.quantity(),
        }
    }
}
