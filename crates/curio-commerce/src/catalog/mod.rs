//! Product catalog module.
//!
//! Contains types for products, conditions, rarity tiers, and categories.

mod category;
mod product;

pub use category::Category;
pub use product::{Condition, Product, Rarity};
