//! In-memory filtering and sorting over a catalog list.
//!
//! All functions here are pure: they take the catalog the data-fetch layer
//! handed over and a filter/sort state, and produce a new list.
//! Filtering never reorders (output is an order-preserving subset of the
//! input), and sorting is stable, so the upstream "featured" ordering
//! survives as the tiebreak everywhere.

use crate::catalog::Product;
use crate::search::{FilterState, SortOption};

/// Apply every active facet of `filters` to `catalog`.
///
/// Facets combine with AND; within a multi-valued facet a product matches
/// if any selected value matches (OR). An inactive facet (empty set,
/// default price range, empty search) imposes no constraint.
pub fn filter_products(catalog: &[Product], filters: &FilterState) -> Vec<Product> {
    let search = normalized_search(filters);
    catalog
        .iter()
        .filter(|p| matches_filters(p, filters, search.as_deref()))
        .cloned()
        .collect()
}

/// Lowercased search needle, or None when the search box is blank.
fn normalized_search(filters: &FilterState) -> Option<String> {
    let needle = filters.search.trim().to_lowercase();
    if needle.is_empty() {
        None
    } else {
        Some(needle)
    }
}

fn matches_filters(product: &Product, filters: &FilterState, search: Option<&str>) -> bool {
    if let Some(needle) = search {
        let in_title = product.title.to_lowercase().contains(needle);
        let in_description = product
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(needle))
            .unwrap_or(false);
        if !in_title && !in_description {
            return false;
        }
    }

    if !filters.categories.is_empty() && !filters.categories.contains(&product.category) {
        return false;
    }

    if !filters.conditions.is_empty() && !filters.conditions.contains(&product.condition) {
        return false;
    }

    if !filters.vendors.is_empty() && !filters.vendors.contains(&product.vendor) {
        return false;
    }

    if !filters.tags.is_empty() && !filters.tags.iter().any(|t| product.has_tag(t)) {
        return false;
    }

    if !filters.price_range.contains(product.price) {
        return false;
    }

    if filters.in_stock && !product.is_in_stock() {
        return false;
    }

    true
}

/// Sort a result list by the given option.
///
/// The sort is stable: products with equal keys keep their relative input
/// order. `Featured` performs no resort at all, relying on the upstream
/// ordering.
pub fn sort_products(mut products: Vec<Product>, sort: SortOption) -> Vec<Product> {
    match sort {
        SortOption::Featured => {}
        SortOption::PriceAsc => {
            products.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents));
        }
        SortOption::PriceDesc => {
            products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents));
        }
        SortOption::NameAsc => {
            products.sort_by_cached_key(|p| p.title.to_lowercase());
        }
        SortOption::Newest => {
            products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortOption::Rating => {
            products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
    }
    products
}

/// Count active filter units: one per selected facet value, one for a
/// non-default price range, one for non-empty search, one for in-stock.
pub fn active_filter_count(filters: &FilterState) -> usize {
    let mut count = filters.categories.len()
        + filters.conditions.len()
        + filters.vendors.len()
        + filters.tags.len();
    if !filters.search.trim().is_empty() {
        count += 1;
    }
    if !filters.price_range.is_default() {
        count += 1;
    }
    if filters.in_stock {
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Condition;
    use crate::ids::VendorId;
    use crate::money::{Currency, Money};
    use crate::search::PriceRange;

    fn product(id: &str, title: &str, cents: i64) -> Product {
        let mut p = Product::new(id, title, Money::new(cents, Currency::USD));
        p.category = "die-cast-cars".to_string();
        p.vendor = VendorId::new("vend-1");
        p.stock = 3;
        p
    }

    fn catalog() -> Vec<Product> {
        let mut a = product("p1", "1963 Corvette", 4999);
        a.condition = Condition::Mint;
        a.add_tag("classic");
        a.created_at = 100;
        a.rating = 4.5;

        let mut b = product("p2", "Tin Rocket Robot", 12999);
        b.category = "tin-toys".to_string();
        b.vendor = VendorId::new("vend-2");
        b.condition = Condition::Good;
        b.description = Some("Wind-up rocket robot from the 1950s".to_string());
        b.created_at = 300;
        b.rating = 4.9;

        let mut c = product("p3", "Corvette Poster", 1500);
        c.category = "posters".to_string();
        c.condition = Condition::New;
        c.stock = 0;
        c.add_tag("classic");
        c.created_at = 200;
        c.rating = 3.2;

        vec![a, b, c]
    }

    #[test]
    fn test_no_filters_passes_everything_in_order() {
        let catalog = catalog();
        let result = filter_products(&catalog, &FilterState::new());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.search = "corvette".to_string();

        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id.as_str(), "p1");
        assert_eq!(result[1].id.as_str(), "p3");

        filters.search = "rocket".to_string();
        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p2");
    }

    #[test]
    fn test_search_trims_and_ignores_case() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.search = "  CORVETTE  ".to_string();

        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_facets_or_within_and_across() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.categories = vec!["die-cast-cars".to_string(), "posters".to_string()];

        // OR within the category facet
        assert_eq!(filter_products(&catalog, &filters).len(), 2);

        // AND with the condition facet
        filters.conditions = vec![Condition::New];
        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p3");
    }

    #[test]
    fn test_tag_filter() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.tags = vec!["classic".to_string()];

        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_vendor_filter() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.vendors = vec![VendorId::new("vend-2")];

        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "p2");
    }

    #[test]
    fn test_price_range_inclusive() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.price_range = PriceRange::new(
            Some(Money::new(1500, Currency::USD)),
            Some(Money::new(4999, Currency::USD)),
        );

        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 2); // both bounds inclusive
    }

    #[test]
    fn test_in_stock_excludes_zero_stock() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.in_stock = true;

        let result = filter_products(&catalog, &filters);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.stock > 0));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = catalog();
        let mut filters = FilterState::new();
        filters.search = "corvette".to_string();
        filters.in_stock = true;

        let once = filter_products(&catalog, &filters);
        let twice = filter_products(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_price_asc_desc() {
        let sorted = sort_products(catalog(), SortOption::PriceAsc);
        let cents: Vec<i64> = sorted.iter().map(|p| p.price.amount_cents).collect();
        assert_eq!(cents, vec![1500, 4999, 12999]);

        let sorted = sort_products(catalog(), SortOption::PriceDesc);
        let cents: Vec<i64> = sorted.iter().map(|p| p.price.amount_cents).collect();
        assert_eq!(cents, vec![12999, 4999, 1500]);
    }

    #[test]
    fn test_sort_name_case_insensitive() {
        let mut catalog = catalog();
        catalog[0].title = "zeppelin model".to_string();
        catalog[1].title = "Antique Globe".to_string();

        let sorted = sort_products(catalog, SortOption::NameAsc);
        assert_eq!(sorted[0].title, "Antique Globe");
        assert_eq!(sorted[1].title, "Corvette Poster");
        assert_eq!(sorted[2].title, "zeppelin model");
    }

    #[test]
    fn test_sort_newest_and_rating() {
        let sorted = sort_products(catalog(), SortOption::Newest);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3", "p1"]);

        let sorted = sort_products(catalog(), SortOption::Rating);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn test_featured_keeps_input_order() {
        let catalog = catalog();
        let sorted = sort_products(catalog.clone(), SortOption::Featured);
        assert_eq!(sorted, catalog);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut catalog = catalog();
        for p in &mut catalog {
            p.price = Money::new(1000, Currency::USD);
        }

        let sorted = sort_products(catalog.clone(), SortOption::PriceAsc);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]); // input order preserved
    }

    #[test]
    fn test_sort_preserves_membership() {
        let catalog = catalog();
        let sorted = sort_products(catalog.clone(), SortOption::Rating);
        assert_eq!(sorted.len(), catalog.len());
        for p in &catalog {
            assert!(sorted.iter().any(|s| s.id == p.id));
        }
    }

    #[test]
    fn test_active_filter_count() {
        let mut filters = FilterState::new();
        assert_eq!(active_filter_count(&filters), 0);

        filters.categories = vec!["a".into(), "b".into(), "c".into()];
        filters.search = "robot".to_string();
        filters.in_stock = true;
        filters.price_range.max = Some(Money::new(5000, Currency::USD));
        assert_eq!(active_filter_count(&filters), 6);
    }
}
