//! Filter state for catalog browsing.

use crate::catalog::Condition;
use crate::ids::VendorId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An inclusive price range bound.
///
/// `None` on either side means that side is unbounded; the default range
/// (both `None`) imposes no constraint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    /// Create a price range from optional bounds.
    pub fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self { min, max }
    }

    /// Check if this is the unconstrained default range.
    pub fn is_default(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check whether a price falls inside the range (bounds inclusive).
    pub fn contains(&self, price: Money) -> bool {
        if let Some(min) = self.min {
            if price.amount_cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = self.max {
            if price.amount_cents > max.amount_cents {
                return false;
            }
        }
        true
    }
}

/// The full set of active filters for a catalog view.
///
/// Multi-valued facets are ordered sets: membership is OR within a facet,
/// and facets combine with AND. The default state (empty search, empty
/// sets, full price range, `in_stock` off) matches everything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterState {
    /// Case-insensitive search text matched against title and description.
    pub search: String,
    /// Selected category slugs.
    pub categories: Vec<String>,
    /// Selected conditions.
    pub conditions: Vec<Condition>,
    /// Selected vendors.
    pub vendors: Vec<VendorId>,
    /// Selected tags.
    pub tags: Vec<String>,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
    /// When true, exclude items with zero stock.
    pub in_stock: bool,
}

impl FilterState {
    /// Create the default (unconstrained) filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no facet imposes a constraint.
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.categories.is_empty()
            && self.conditions.is_empty()
            && self.vendors.is_empty()
            && self.tags.is_empty()
            && self.price_range.is_default()
            && !self.in_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_default_state_is_default() {
        assert!(FilterState::new().is_default());
    }

    #[test]
    fn test_any_facet_breaks_default() {
        let mut filters = FilterState::new();
        filters.in_stock = true;
        assert!(!filters.is_default());

        let mut filters = FilterState::new();
        filters.categories.push("coins".to_string());
        assert!(!filters.is_default());
    }

    #[test]
    fn test_price_range_bounds_inclusive() {
        let range = PriceRange::new(
            Some(Money::new(1000, Currency::USD)),
            Some(Money::new(5000, Currency::USD)),
        );

        assert!(range.contains(Money::new(1000, Currency::USD)));
        assert!(range.contains(Money::new(5000, Currency::USD)));
        assert!(range.contains(Money::new(2500, Currency::USD)));
        assert!(!range.contains(Money::new(999, Currency::USD)));
        assert!(!range.contains(Money::new(5001, Currency::USD)));
    }

    #[test]
    fn test_price_range_half_open() {
        let range = PriceRange::new(None, Some(Money::new(2000, Currency::USD)));
        assert!(range.contains(Money::new(0, Currency::USD)));
        assert!(!range.contains(Money::new(2001, Currency::USD)));
        assert!(!range.is_default());
    }
}
