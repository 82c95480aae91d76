//! Search module.
//!
//! Contains the filter engine, facet counting, filter state, and sort options.

mod engine;
mod facets;
mod filter;
mod query;

pub use engine::{active_filter_count, filter_products, sort_products};
pub use facets::{Facet, FacetValue, Facets};
pub use filter::{FilterState, PriceRange};
pub use query::{SortOption, ViewMode};
