// Shared cart line item fixture. Compiled only for tests.

use crate::modules::shopping::core::cart_line_item::{CartLineItem, LineItemId};
use crate::modules::shopping::core::product::Product;

pub struct LineItemBuilder {
    inner: CartLineItem,
}

#[allow(dead_code)]
impl LineItemBuilder {
    pub fn new(product: Product) -> Self {
        Self {
            inner: CartLineItem {
                id: 1,
                quantity: 1,
                is_checked: true,
                product,
            },
        }
    }

    pub fn id(mut self, v: LineItemId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn quantity(mut self, v: u32) -> Self {
        self.inner.quantity = v;
        self
    }

    pub fn checked(mut self, v: bool) -> Self {
        self.inner.is_checked = v;
        self
    }

    pub fn build(self) -> CartLineItem {
        self.inner
    }
}

#[cfg(test)]
mod line_item_builder_tests {
    use super::*;
    use crate::tests::fixtures::products::make_product;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = LineItemBuilder::new(make_product(2))
            .id(42)
            .quantity(9)
            .checked(false)
            .build();
        assert_eq!(built.id, 42);
        assert_eq!(built.quantity, 9);
        assert!(!built.is_checked);
        assert_eq!(built.product.id, 2);
    }
}
