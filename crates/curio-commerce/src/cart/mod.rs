//! Shopping cart module.
//!
//! Contains types for line items, coupons, and order pricing.

mod coupon;
mod line_item;
mod pricing;

pub use coupon::{Coupon, CouponEffect, CouponValidator};
pub use line_item::CartLineItem;
pub use pricing::{
    compute_summary, CartSummary, FLAT_SHIPPING_RATE_CENTS, FREE_SHIPPING_THRESHOLD_CENTS,
    TAX_RATE,
};
