//! Query-string codec for filter, sort, and view state.
//!
//! Parsing never fails: malformed values, unknown parameters, and bad
//! percent-escapes are dropped silently and the affected field keeps its
//! default. Encoding omits every parameter at its default so shared URLs
//! stay minimal.

use curio_commerce::catalog::Condition;
use curio_commerce::ids::VendorId;
use curio_commerce::money::{Currency, Money};
use curio_commerce::search::{FilterState, SortOption, ViewMode};

/// The full address-bar state: filters plus sort and view options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    pub filters: FilterState,
    pub sort: SortOption,
    pub view: ViewMode,
}

impl QueryState {
    pub fn new(filters: FilterState, sort: SortOption, view: ViewMode) -> Self {
        QueryState {
            filters,
            sort,
            view,
        }
    }

    /// Parse a query string (with or without the leading `?`).
    ///
    /// Both `category` and `categories` are accepted for compatibility
    /// with older shared links; their values are merged.
    pub fn parse(query: &str) -> Self {
        let mut state = QueryState::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let key = match parts.next() {
                Some(k) => k,
                None => continue,
            };
            let raw_value = match parts.next() {
                Some(v) if !v.is_empty() => v,
                _ => continue,
            };

            match key {
                "q" => {
                    if let Some(text) = decode(raw_value) {
                        state.filters.search = text;
                    }
                }
                "category" | "categories" => {
                    for slug in decode_list(raw_value) {
                        if !state.filters.categories.contains(&slug) {
                            state.filters.categories.push(slug);
                        }
                    }
                }
                "conditions" => {
                    for value in decode_list(raw_value) {
                        if let Some(condition) = Condition::from_str(&value) {
                            if !state.filters.conditions.contains(&condition) {
                                state.filters.conditions.push(condition);
                            }
                        }
                    }
                }
                "min_price" => state.filters.price_range.min = parse_price(raw_value),
                "max_price" => state.filters.price_range.max = parse_price(raw_value),
                "vendors" => {
                    for value in decode_list(raw_value) {
                        let vendor = VendorId::new(value);
                        if !state.filters.vendors.contains(&vendor) {
                            state.filters.vendors.push(vendor);
                        }
                    }
                }
                "in_stock" => state.filters.in_stock = raw_value == "true",
                "tags" => {
                    for tag in decode_list(raw_value) {
                        if !state.filters.tags.contains(&tag) {
                            state.filters.tags.push(tag);
                        }
                    }
                }
                "sort" => {
                    if let Some(sort) = SortOption::from_str(raw_value) {
                        state.sort = sort;
                    }
                }
                "view" => {
                    if let Some(view) = ViewMode::from_str(raw_value) {
                        state.view = view;
                    }
                }
                _ => {}
            }
        }

        state
    }

    /// Serialize to a query string without the leading `?`.
    ///
    /// Defaults are omitted; a fully default state encodes to `""`.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if !self.filters.search.trim().is_empty() {
            pairs.push(format!("q={}", urlencoding::encode(&self.filters.search)));
        }
        if !self.filters.categories.is_empty() {
            pairs.push(format!(
                "categories={}",
                encode_list(&self.filters.categories)
            ));
        }
        if !self.filters.conditions.is_empty() {
            let values: Vec<String> = self
                .filters
                .conditions
                .iter()
                .map(|c| c.as_str().to_string())
                .collect();
            pairs.push(format!("conditions={}", encode_list(&values)));
        }
        if let Some(min) = self.filters.price_range.min {
            pairs.push(format!("min_price={}", min.display_amount()));
        }
        if let Some(max) = self.filters.price_range.max {
            pairs.push(format!("max_price={}", max.display_amount()));
        }
        if !self.filters.vendors.is_empty() {
            let values: Vec<String> = self
                .filters
                .vendors
                .iter()
                .map(|v| v.as_str().to_string())
                .collect();
            pairs.push(format!("vendors={}", encode_list(&values)));
        }
        if self.filters.in_stock {
            pairs.push("in_stock=true".to_string());
        }
        if !self.filters.tags.is_empty() {
            pairs.push(format!("tags={}", encode_list(&self.filters.tags)));
        }
        if self.sort != SortOption::default() {
            pairs.push(format!("sort={}", self.sort.as_str()));
        }
        if self.view != ViewMode::default() {
            pairs.push(format!("view={}", self.view.as_str()));
        }

        pairs.join("&")
    }
}

fn decode(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(|cow| cow.into_owned())
}

/// Split a comma-separated list, decoding each element. Elements holding
/// a literal comma arrive percent-encoded, so splitting first is safe.
fn decode_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|part| !part.is_empty())
        .filter_map(decode)
        .collect()
}

fn encode_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Major units with up to two decimals; anything unparseable or negative
/// is treated as absent.
fn parse_price(raw: &str) -> Option<Money> {
    let decoded = decode(raw)?;
    let value: f64 = decoded.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(Money::from_decimal(value, Currency::USD))
}
