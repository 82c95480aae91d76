//! Storefront error types.
//!
//! Every variant's `Display` string doubles as the user-facing notification
//! message, so callers surface errors as transient toasts and keep going.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorefrontError {
    /// Requested quantity exceeds available stock.
    #[error("Only {available} in stock (requested {requested})")]
    OutOfStock { requested: i64, available: i64 },

    /// Quantity is zero or negative where a positive count is required.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// No cart line item with the given ID.
    #[error("Item not in cart: {0}")]
    ProductNotInCart(String),

    /// Unknown coupon code.
    #[error("Invalid coupon code: {0}")]
    InvalidCoupon(String),

    /// Known coupon code past its end date.
    #[error("Coupon expired: {0}")]
    CouponExpired(String),

    /// Checkout attempted with no items.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Checkout step jump that skips ahead.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },
}
