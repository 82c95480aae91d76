//! Order totals: subtotal, discount, shipping, and tax.

use crate::cart::{CartLineItem, Coupon};
use crate::error::StorefrontError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Flat shipping rate below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE_CENTS: i64 = 999;

/// Sales tax applied to the pre-discount subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Computed totals for a cart at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    pub coupon_code: Option<String>,
}

impl CartSummary {
    pub fn empty(currency: Currency) -> Self {
        CartSummary {
            item_count: 0,
            subtotal: Money::zero(currency),
            discount: Money::zero(currency),
            shipping: Money::zero(currency),
            tax: Money::zero(currency),
            total: Money::zero(currency),
            coupon_code: None,
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Amount still needed to qualify for free shipping, if any.
    pub fn remaining_for_free_shipping(&self) -> Option<Money> {
        if self.shipping.is_zero() && self.item_count > 0 {
            return None;
        }
        let gap = FREE_SHIPPING_THRESHOLD_CENTS - self.subtotal.amount_cents;
        if gap > 0 {
            Some(Money::new(gap, self.subtotal.currency))
        } else {
            None
        }
    }
}

/// Price a cart. `coupon` must already have passed validation.
///
/// Shipping is waived for empty carts, for subtotals at or above the
/// free-shipping threshold, and for free-shipping coupons. Tax applies
/// to the subtotal before the discount comes off. All quantity and money
/// arithmetic is checked; a cart that does not fit the representable
/// range fails with [`StorefrontError::Overflow`].
pub fn compute_summary(
    items: &[CartLineItem],
    coupon: Option<&Coupon>,
) -> Result<CartSummary, StorefrontError> {
    let currency = items
        .first()
        .map(|item| item.product.price.currency)
        .unwrap_or(Currency::USD);

    let mut item_count: i64 = 0;
    let mut subtotal = Money::zero(currency);
    for item in items {
        item_count = item_count
            .checked_add(item.quantity)
            .ok_or(StorefrontError::Overflow)?;
        subtotal = subtotal
            .try_add(&item.line_total()?)
            .ok_or(StorefrontError::Overflow)?;
    }

    let discount = match coupon {
        Some(coupon) => subtotal.multiply_decimal(coupon.discount_fraction()),
        None => Money::zero(currency),
    };

    let free_shipping = items.is_empty()
        || subtotal.amount_cents >= FREE_SHIPPING_THRESHOLD_CENTS
        || coupon.map(Coupon::waives_shipping).unwrap_or(false);
    let shipping = if free_shipping {
        Money::zero(currency)
    } else {
        Money::new(FLAT_SHIPPING_RATE_CENTS, currency)
    };

    let tax = subtotal.multiply_decimal(TAX_RATE);
    let total = subtotal
        .try_subtract(&discount)
        .and_then(|due| due.try_add(&shipping))
        .and_then(|due| due.try_add(&tax))
        .ok_or(StorefrontError::Overflow)?;

    Ok(CartSummary {
        item_count,
        subtotal,
        discount,
        shipping,
        tax,
        total,
        coupon_code: coupon.map(|c| c.code.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn line(cents: i64, quantity: i64) -> CartLineItem {
        let product = Product::new("p1", "Model Car", Money::new(cents, Currency::USD));
        CartLineItem::new(product, quantity)
    }

    #[test]
    fn test_empty_cart_is_all_zeros() {
        let summary = compute_summary(&[], None).unwrap();
        assert_eq!(summary.item_count, 0);
        assert!(summary.subtotal.is_zero());
        assert!(summary.shipping.is_zero());
        assert!(summary.tax.is_zero());
        assert!(summary.total.is_zero());
        assert!(!summary.has_discount());
    }

    #[test]
    fn test_flat_shipping_below_threshold() {
        let summary = compute_summary(&[line(4_000, 2)], None).unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.subtotal.amount_cents, 8_000);
        assert_eq!(summary.shipping.amount_cents, FLAT_SHIPPING_RATE_CENTS);
        assert_eq!(summary.tax.amount_cents, 800);
        assert_eq!(summary.total.amount_cents, 9_799);
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let summary = compute_summary(&[line(10_000, 1)], None).unwrap();
        assert!(summary.shipping.is_zero());
        assert_eq!(summary.total.amount_cents, 11_000);
    }

    #[test]
    fn test_free_shipping_coupon_waives_flat_rate() {
        let coupon = Coupon::free_shipping("FREESHIP", "Free shipping");
        let summary = compute_summary(&[line(2_000, 1)], Some(&coupon)).unwrap();
        assert!(summary.shipping.is_zero());
        assert!(!summary.has_discount());
        assert_eq!(summary.coupon_code.as_deref(), Some("FREESHIP"));
    }

    #[test]
    fn test_percent_coupon_discounts_subtotal() {
        let coupon = Coupon::percent_off("WELCOME10", "10% off", 0.10);
        let summary = compute_summary(&[line(4_000, 2)], Some(&coupon)).unwrap();
        assert_eq!(summary.discount.amount_cents, 800);
        // tax still applies to the pre-discount subtotal
        assert_eq!(summary.tax.amount_cents, 800);
        assert_eq!(summary.total.amount_cents, 8_999);
        assert!(summary.has_discount());
    }

    #[test]
    fn test_discount_rounds_to_nearest_cent() {
        let coupon = Coupon::percent_off("SAVE20", "20% off", 0.20);
        let summary = compute_summary(&[line(1_003, 1)], Some(&coupon)).unwrap();
        assert_eq!(summary.discount.amount_cents, 201); // 200.6 rounds up
    }

    #[test]
    fn test_huge_line_total_is_an_overflow_error() {
        // quantity and price each fit in i64; their product does not
        let result = compute_summary(&[line(1_000_000_000, 20_000_000_000)], None);
        assert_eq!(result, Err(StorefrontError::Overflow));
    }

    #[test]
    fn test_subtotal_overflow_across_lines() {
        let lines = [
            line(5_000_000_000_000_000_000, 1),
            line(5_000_000_000_000_000_000, 1),
        ];
        assert_eq!(compute_summary(&lines, None), Err(StorefrontError::Overflow));
    }

    #[test]
    fn test_remaining_for_free_shipping() {
        let summary = compute_summary(&[line(6_500, 1)], None).unwrap();
        assert_eq!(
            summary.remaining_for_free_shipping(),
            Some(Money::new(3_500, Currency::USD))
        );

        let summary = compute_summary(&[line(12_000, 1)], None).unwrap();
        assert_eq!(summary.remaining_for_free_shipping(), None);
    }
}
