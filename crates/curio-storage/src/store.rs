//! Typed, session-scoped view over a storage backend.

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{SessionId, StorageBackend, StorageError};

/// Session-scoped store with automatic JSON serialization.
///
/// Every key is prefixed with the session ID, so several sessions can
/// share one backend without colliding. Cloning is cheap; clones share
/// the backend.
#[derive(Clone)]
pub struct SessionStore {
    session_id: SessionId,
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    /// Open a store for a freshly generated session.
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self::for_session(SessionId::generate(), backend)
    }

    /// Open a store for a known session, e.g. one read back from a cookie.
    pub fn for_session(session_id: SessionId, backend: Rc<dyn StorageBackend>) -> Self {
        SessionStore {
            session_id,
            backend,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Whether the backend can be reached right now.
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Read and deserialize a value. A missing key is `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.read(&self.scoped_key(key))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.write(&self.scoped_key(key), &raw)
    }

    /// Delete a value. Deleting a missing key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(&self.scoped_key(key))
    }

    fn scoped_key(&self, key: &str) -> String {
        format!("{}:{}", self.session_id, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Draft {
        text: String,
        revision: u32,
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = SessionStore::new(Rc::new(MemoryBackend::new()));
        let draft = Draft {
            text: "wish you were here".to_string(),
            revision: 3,
        };

        store.set("draft", &draft).unwrap();
        assert_eq!(store.get::<Draft>("draft").unwrap(), Some(draft));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = SessionStore::new(Rc::new(MemoryBackend::new()));
        assert_eq!(store.get::<Draft>("absent").unwrap(), None);
    }

    #[test]
    fn test_sessions_do_not_collide() {
        let backend: Rc<MemoryBackend> = Rc::new(MemoryBackend::new());
        let a = SessionStore::for_session(SessionId::new("sess_a"), backend.clone());
        let b = SessionStore::for_session(SessionId::new("sess_b"), backend);

        a.set("count", &1u32).unwrap();
        b.set("count", &2u32).unwrap();

        assert_eq!(a.get::<u32>("count").unwrap(), Some(1));
        assert_eq!(b.get::<u32>("count").unwrap(), Some(2));
    }

    #[test]
    fn test_remove_clears_the_value() {
        let store = SessionStore::new(Rc::new(MemoryBackend::new()));
        store.set("count", &7u32).unwrap();
        store.remove("count").unwrap();
        assert_eq!(store.get::<u32>("count").unwrap(), None);
    }

    #[test]
    fn test_unavailable_backend_surfaces_error() {
        let backend = Rc::new(MemoryBackend::unavailable());
        let store = SessionStore::new(backend.clone());

        assert!(!store.is_available());
        assert!(matches!(
            store.set("count", &1u32),
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(
            store.get::<u32>("count"),
            Err(StorageError::Unavailable)
        ));

        backend.set_available(true);
        assert!(store.is_available());
        store.set("count", &1u32).unwrap();
    }

    #[test]
    fn test_clones_share_the_backend() {
        let store = SessionStore::new(Rc::new(MemoryBackend::new()));
        let clone = store.clone();

        store.set("count", &9u32).unwrap();
        assert_eq!(clone.get::<u32>("count").unwrap(), Some(9));
    }
}
