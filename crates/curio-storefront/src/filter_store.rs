//! Filter, sort, and view state for a browsing session.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use curio_commerce::catalog::{Condition, Product};
use curio_commerce::ids::VendorId;
use curio_commerce::search::{
    active_filter_count, filter_products, sort_products, FilterState, PriceRange, SortOption,
    ViewMode,
};
use curio_storage::SessionStore;

use crate::address_bar::AddressBar;
use crate::query::QueryState;

const PRESETS_KEY: &str = "filter_presets";

/// A single-field replacement of one facet of the filter state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(String),
    Categories(Vec<String>),
    Conditions(Vec<Condition>),
    Vendors(Vec<VendorId>),
    Tags(Vec<String>),
    PriceRange(PriceRange),
    InStock(bool),
}

/// Names one facet, for targeted resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFacet {
    Search,
    Categories,
    Conditions,
    Vendors,
    Tags,
    PriceRange,
    InStock,
}

/// Owns the current filter/sort/view state and keeps the address bar in
/// sync with it.
///
/// Initial state comes from parsing the address bar, so shared links
/// restore the exact view. Every subsequent change rewrites the query
/// string in place (replace, never push) with defaults omitted. Filter
/// and sort changes bump `revision`, which downstream pagination watches
/// to reset itself; a view-mode change rewrites the URL but leaves the
/// revision alone since the list identity is unchanged.
pub struct FilterStateStore {
    filters: FilterState,
    sort: SortOption,
    view_mode: ViewMode,
    revision: u64,
    address_bar: Box<dyn AddressBar>,
    storage: SessionStore,
}

impl FilterStateStore {
    pub fn new(address_bar: Box<dyn AddressBar>, storage: SessionStore) -> Self {
        let initial = QueryState::parse(&address_bar.read());
        FilterStateStore {
            filters: initial.filters,
            sort: initial.sort,
            view_mode: initial.view,
            revision: 0,
            address_bar,
            storage,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Bumped on every change that alters the result list's identity.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_filter_count(&self) -> usize {
        active_filter_count(&self.filters)
    }

    /// The filtered, sorted list for the current state.
    pub fn results(&self, catalog: &[Product]) -> Vec<Product> {
        sort_products(filter_products(catalog, &self.filters), self.sort)
    }

    /// Replace one facet of the filter state.
    pub fn update_filter(&mut self, change: FilterChange) {
        match change {
            FilterChange::Search(search) => self.filters.search = search,
            FilterChange::Categories(categories) => self.filters.categories = categories,
            FilterChange::Conditions(conditions) => self.filters.conditions = conditions,
            FilterChange::Vendors(vendors) => self.filters.vendors = vendors,
            FilterChange::Tags(tags) => self.filters.tags = tags,
            FilterChange::PriceRange(range) => self.filters.price_range = range,
            FilterChange::InStock(in_stock) => self.filters.in_stock = in_stock,
        }
        self.commit_list_change();
    }

    /// Reset one facet to its default.
    pub fn clear_filter(&mut self, facet: FilterFacet) {
        match facet {
            FilterFacet::Search => self.filters.search.clear(),
            FilterFacet::Categories => self.filters.categories.clear(),
            FilterFacet::Conditions => self.filters.conditions.clear(),
            FilterFacet::Vendors => self.filters.vendors.clear(),
            FilterFacet::Tags => self.filters.tags.clear(),
            FilterFacet::PriceRange => self.filters.price_range = PriceRange::default(),
            FilterFacet::InStock => self.filters.in_stock = false,
        }
        self.commit_list_change();
    }

    /// Reset every facet to its default.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::new();
        self.commit_list_change();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        if self.sort == sort {
            return;
        }
        self.sort = sort;
        self.commit_list_change();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        if self.view_mode == view_mode {
            return;
        }
        self.view_mode = view_mode;
        self.sync_address_bar();
    }

    /// Persist the current filter state under `name`. Returns whether the
    /// preset was stored.
    pub fn save_preset(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let mut presets = self.read_presets();
        presets.insert(name.to_string(), self.filters.clone());
        match self.storage.set(PRESETS_KEY, &presets) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, preset = name, "failed to persist filter preset");
                false
            }
        }
    }

    /// Restore a saved preset as the current filter state. Returns whether
    /// the preset existed.
    pub fn load_preset(&mut self, name: &str) -> bool {
        let presets = self.read_presets();
        match presets.get(name.trim()) {
            Some(filters) => {
                debug!(preset = name.trim(), "loading filter preset");
                self.filters = filters.clone();
                self.commit_list_change();
                true
            }
            None => false,
        }
    }

    /// Names of all saved presets, sorted.
    pub fn preset_names(&self) -> Vec<String> {
        self.read_presets().into_keys().collect()
    }

    fn read_presets(&self) -> BTreeMap<String, FilterState> {
        match self.storage.get::<BTreeMap<String, FilterState>>(PRESETS_KEY) {
            Ok(Some(presets)) => presets,
            Ok(None) => BTreeMap::new(),
            Err(error) => {
                warn!(%error, "failed to read filter presets");
                BTreeMap::new()
            }
        }
    }

    fn commit_list_change(&mut self) {
        self.revision += 1;
        self.sync_address_bar();
    }

    fn sync_address_bar(&mut self) {
        let query = QueryState::new(self.filters.clone(), self.sort, self.view_mode)
            .to_query_string();
        self.address_bar.replace(&query);
    }
}
