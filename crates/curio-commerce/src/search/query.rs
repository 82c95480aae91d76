//! Sort and view options for catalog result lists.

use serde::{Deserialize, Serialize};

/// Sort options for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Curated order. Performs no resort; upstream ordering is the signal.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by title A-Z.
    NameAsc,
    /// Sort by newest first.
    Newest,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(SortOption::Featured),
            "price_asc" => Some(SortOption::PriceAsc),
            "price_desc" => Some(SortOption::PriceDesc),
            "name_asc" => Some(SortOption::NameAsc),
            "newest" => Some(SortOption::Newest),
            "rating" => Some(SortOption::Rating),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Highest Rated",
        }
    }

    /// All options, in menu order.
    pub fn all() -> [SortOption; 6] {
        [
            SortOption::Featured,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::NameAsc,
            SortOption::Newest,
            SortOption::Rating,
        ]
    }
}

/// How the result list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}
