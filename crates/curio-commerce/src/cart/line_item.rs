//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::ids::LineItemId;
use crate::money::Money;

/// A product in the cart together with its quantity.
///
/// The full product snapshot is kept on the line so totals and stock
/// checks work without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub product: Product,
    pub quantity: i64,
    pub added_at: i64,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        CartLineItem {
            id: LineItemId::generate(),
            product,
            quantity,
            added_at: current_timestamp(),
        }
    }

    /// Unit price times quantity, checked.
    pub fn line_total(&self) -> Result<Money, StorefrontError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(StorefrontError::Overflow)
    }
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_line_total() {
        let product = Product::new("p1", "Tin Robot", Money::new(2500, Currency::USD));
        let item = CartLineItem::new(product, 3);
        assert_eq!(item.line_total().unwrap(), Money::new(7500, Currency::USD));
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        let price = Money::new(1_000_000_000, Currency::USD);
        let product = Product::new("p1", "Gold Meteorite", price);
        let item = CartLineItem::new(product, 20_000_000_000);
        assert_eq!(item.line_total(), Err(StorefrontError::Overflow));
    }

    #[test]
    fn test_new_items_get_distinct_ids() {
        let product = Product::new("p1", "Tin Robot", Money::new(2500, Currency::USD));
        let a = CartLineItem::new(product.clone(), 1);
        let b = CartLineItem::new(product, 1);
        assert_ne!(a.id, b.id);
    }
}
