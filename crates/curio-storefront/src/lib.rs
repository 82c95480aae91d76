//! Browsing-session state for the Curio Exchange storefront.
//!
//! The stateful layer over `curio-commerce` and `curio-storage`:
//!
//! - **FilterStateStore**: filter/sort/view state, synchronized with the
//!   address bar and saveable as named presets
//! - **CartStore**: stock-checked cart mutations with write-through
//!   persistence and recomputed totals
//! - **WishlistStore**: a persisted product-id set
//! - **PaginationWindow**: progressive reveal of the result list
//! - **SearchDebouncer**: keystroke coalescing for the search box
//!
//! One instance of each store serves one browsing session; nothing here
//! is shared or global. All storage and address-bar access goes through
//! injected ports, so every store runs unchanged in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use curio_storage::{MemoryBackend, SessionStore};
//! use curio_storefront::prelude::*;
//!
//! let storage = SessionStore::new(Rc::new(MemoryBackend::new()));
//! let mut filters = FilterStateStore::new(address_bar, storage.clone());
//! let mut cart = CartStore::new(storage);
//! cart.hydrate();
//!
//! filters.update_filter(FilterChange::Search("tin robot".into()));
//! let results = filters.results(&catalog);
//!
//! cart.add_to_cart(&results[0], 1)?;
//! println!("Total: {}", cart.summary().total.display());
//! ```

mod address_bar;
mod cart_store;
mod debounce;
mod filter_store;
mod pagination;
mod query;
mod wishlist;

pub use address_bar::{AddressBar, MemoryAddressBar};
pub use cart_store::CartStore;
pub use debounce::{SearchDebouncer, DEFAULT_SEARCH_DELAY};
pub use filter_store::{FilterChange, FilterFacet, FilterStateStore};
pub use pagination::{PaginationWindow, DISPLAY_COUNT_STEP, INITIAL_DISPLAY_COUNT};
pub use query::QueryState;
pub use wishlist::WishlistStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::address_bar::{AddressBar, MemoryAddressBar};
    pub use crate::cart_store::CartStore;
    pub use crate::debounce::SearchDebouncer;
    pub use crate::filter_store::{FilterChange, FilterFacet, FilterStateStore};
    pub use crate::pagination::PaginationWindow;
    pub use crate::query::QueryState;
    pub use crate::wishlist::WishlistStore;
}
