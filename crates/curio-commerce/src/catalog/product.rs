//! Product types for the collectibles catalog.

use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Physical condition of a collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Factory sealed, never opened.
    New,
    /// Opened but flawless.
    Mint,
    #[default]
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Mint => "mint",
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(Condition::New),
            "mint" => Some(Condition::Mint),
            "excellent" => Some(Condition::Excellent),
            "good" => Some(Condition::Good),
            "fair" => Some(Condition::Fair),
            "poor" => Some(Condition::Poor),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Mint => "Mint",
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

/// Rarity tier of a collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    UltraRare,
    Grail,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::UltraRare => "ultra-rare",
            Rarity::Grail => "grail",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Grail => "Grail",
        }
    }
}

/// A product in the catalog.
///
/// Once placed in a cart line item the product is an immutable snapshot;
/// later catalog updates don't reach into existing carts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Full description.
    pub description: Option<String>,
    /// Listing price.
    pub price: Money,
    /// Compare-at price (original price for showing markdowns).
    pub compare_at_price: Option<Money>,
    /// Category slug this product belongs to.
    pub category: String,
    /// Vendor selling this product.
    pub vendor: VendorId,
    /// Physical condition.
    pub condition: Condition,
    /// Rarity tier, if graded.
    pub rarity: Option<Rarity>,
    /// Units available. Never negative.
    pub stock: i64,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
    /// Average review rating (0.0 - 5.0).
    pub rating: f64,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a new product with defaults for the optional fields.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            price,
            compare_at_price: None,
            category: String::new(),
            vendor: VendorId::new(""),
            condition: Condition::default(),
            rarity: None,
            stock: 0,
            tags: Vec::new(),
            rating: 0.0,
            created_at: current_timestamp(),
        }
    }

    /// Check if any units are available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if this product is marked down (has a higher compare-at price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the markdown percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.compare_at_price.and_then(|cap| {
            if cap.amount_cents > self.price.amount_cents {
                let savings = cap.amount_cents - self.price.amount_cents;
                Some((savings as f64 / cap.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Check if this product carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
