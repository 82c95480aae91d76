//! Checkout module.
//!
//! Contains the multi-step checkout flow.

mod flow;

pub use flow::{CheckoutFlow, CheckoutStep};
