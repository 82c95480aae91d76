//! Facet value counts derived from a result list.
//!
//! Counts are computed from the already-filtered results, so each facet
//! panel shows how many of the current matches carry each value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::FilterState;

/// One selectable value within a facet, with its match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// A named group of facet values (category, condition, vendor, tag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub values: Vec<FacetValue>,
}

/// All facet panels for a result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub categories: Facet,
    pub conditions: Facet,
    pub vendors: Facet,
    pub tags: Facet,
}

impl Facets {
    /// Tally facet values across `results`, marking the ones already
    /// selected in `filters`. Values are ordered by count descending,
    /// then value ascending so equal counts render deterministically.
    pub fn from_results(results: &[Product], filters: &FilterState) -> Self {
        let mut categories: HashMap<String, usize> = HashMap::new();
        let mut conditions: HashMap<String, usize> = HashMap::new();
        let mut vendors: HashMap<String, usize> = HashMap::new();
        let mut tags: HashMap<String, usize> = HashMap::new();

        for product in results {
            *categories.entry(product.category.clone()).or_insert(0) += 1;
            *conditions
                .entry(product.condition.as_str().to_string())
                .or_insert(0) += 1;
            *vendors
                .entry(product.vendor.as_str().to_string())
                .or_insert(0) += 1;
            for tag in &product.tags {
                *tags.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let selected_conditions: Vec<String> = filters
            .conditions
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        let selected_vendors: Vec<String> = filters
            .vendors
            .iter()
            .map(|v| v.as_str().to_string())
            .collect();

        Facets {
            categories: build_facet("Category", categories, &filters.categories, |v| {
                title_case(v)
            }),
            conditions: build_facet("Condition", conditions, &selected_conditions, |v| {
                title_case(v)
            }),
            vendors: build_facet("Vendor", vendors, &selected_vendors, |v| v.to_string()),
            tags: build_facet("Tags", tags, &filters.tags, |v| v.to_string()),
        }
    }
}

fn build_facet(
    name: &str,
    counts: HashMap<String, usize>,
    selected: &[String],
    label: impl Fn(&str) -> String,
) -> Facet {
    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(value, count)| FacetValue {
            label: label(&value),
            selected: selected.contains(&value),
            value,
            count,
        })
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    Facet {
        name: name.to_string(),
        values,
    }
}

fn title_case(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
