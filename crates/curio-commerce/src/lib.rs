//! Domain types and logic for the Curio Exchange storefront.
//!
//! This crate provides the pure core behind the browse-and-buy surface:
//!
//! - **Catalog**: Collectible products, conditions, rarity, categories
//! - **Search**: Faceted filtering, sorting, facet counts
//! - **Cart**: Line items, coupons, order totals
//! - **Checkout**: Multi-step checkout flow
//!
//! Everything here is synchronous and side-effect free; persistence and
//! UI state live in the companion crates.
//!
//! # Example
//!
//! ```rust,ignore
//! use curio_commerce::prelude::*;
//!
//! let mut filters = FilterState::new();
//! filters.categories.push("tin-toys".to_string());
//! filters.in_stock = true;
//!
//! let results = filter_products(&catalog, &filters);
//! let results = sort_products(results, SortOption::PriceAsc);
//!
//! let summary = compute_summary(&items, coupon.as_ref())?;
//! println!("Total: {}", summary.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::StorefrontError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Condition, Product, Rarity};

    // Search
    pub use crate::search::{
        active_filter_count, filter_products, sort_products, Facet, FacetValue, Facets,
        FilterState, PriceRange, SortOption, ViewMode,
    };

    // Cart
    pub use crate::cart::{
        compute_summary, CartLineItem, CartSummary, Coupon, CouponEffect, CouponValidator,
    };

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStep};
}
