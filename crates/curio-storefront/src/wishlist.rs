//! Persisted wishlist for a browsing session.

use tracing::{debug, warn};

use curio_commerce::ids::ProductId;
use curio_storage::SessionStore;

const WISHLIST_KEY: &str = "wishlist";

/// An ordered set of wished-for product ids, written through to durable
/// storage on every toggle.
pub struct WishlistStore {
    items: Vec<ProductId>,
    storage: SessionStore,
}

impl WishlistStore {
    pub fn new(storage: SessionStore) -> Self {
        WishlistStore {
            items: Vec::new(),
            storage,
        }
    }

    /// Restore the persisted wishlist, if durable storage can be reached
    /// in this execution context. Returns whether hydration ran.
    pub fn hydrate(&mut self) -> bool {
        if !self.storage.is_available() {
            debug!("durable storage unavailable; skipping wishlist hydration");
            return false;
        }
        match self.storage.get::<Vec<ProductId>>(WISHLIST_KEY) {
            Ok(Some(items)) => {
                debug!(count = items.len(), "hydrated wishlist from storage");
                self.items = items;
            }
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "failed to read persisted wishlist; starting empty");
                self.items.clear();
            }
        }
        true
    }

    /// Add or remove a product. Returns whether the product is on the
    /// wishlist afterwards.
    pub fn toggle(&mut self, product_id: &ProductId) -> bool {
        let on_list = match self.items.iter().position(|id| id == product_id) {
            Some(index) => {
                self.items.remove(index);
                false
            }
            None => {
                self.items.push(product_id.clone());
                true
            }
        };
        self.persist();
        on_list
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.contains(product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids in the order they were wished for.
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    fn persist(&self) {
        if let Err(error) = self.storage.set(WISHLIST_KEY, &self.items) {
            warn!(%error, "failed to persist wishlist");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_storage::{MemoryBackend, SessionStore};
    use std::rc::Rc;

    fn wishlist() -> WishlistStore {
        WishlistStore::new(SessionStore::new(Rc::new(MemoryBackend::new())))
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = wishlist();
        let id = ProductId::new("p1");

        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));
        assert_eq!(wishlist.len(), 1);

        assert!(!wishlist.toggle(&id));
        assert!(!wishlist.contains(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut wishlist = wishlist();
        wishlist.toggle(&ProductId::new("p2"));
        wishlist.toggle(&ProductId::new("p1"));
        wishlist.toggle(&ProductId::new("p3"));

        let ids: Vec<&str> = wishlist.items().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn test_survives_reload_through_storage() {
        let backend = Rc::new(MemoryBackend::new());
        let storage = SessionStore::new(backend);
        let id = ProductId::new("p1");

        let mut wishlist = WishlistStore::new(storage.clone());
        wishlist.toggle(&id);

        let mut reloaded = WishlistStore::new(storage);
        assert!(reloaded.hydrate());
        assert!(reloaded.contains(&id));
    }

    #[test]
    fn test_hydrate_skipped_while_storage_unavailable() {
        let backend = Rc::new(MemoryBackend::unavailable());
        let mut wishlist = WishlistStore::new(SessionStore::new(backend.clone()));

        assert!(!wishlist.hydrate());

        // toggles still work, persistence is best-effort
        let id = ProductId::new("p1");
        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));

        backend.set_available(true);
        assert!(wishlist.hydrate());
    }
}
