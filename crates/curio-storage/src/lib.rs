//! Session-scoped durable storage for the Curio Exchange storefront.
//!
//! Provides a small key-value abstraction with automatic JSON
//! serialization, modeled on browser local storage: string keys, string
//! values, and a backend that may be unavailable in some contexts.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use curio_storage::{MemoryBackend, SessionStore};
//!
//! let store = SessionStore::new(Rc::new(MemoryBackend::new()));
//!
//! store.set("cart", &cart)?;
//! let cart: Option<Cart> = store.get("cart")?;
//! store.remove("cart")?;
//! ```

mod backend;
mod error;
mod session;
mod store;

pub use backend::{MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use session::SessionId;
pub use store::SessionStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryBackend, SessionId, SessionStore, StorageBackend, StorageError};
}
