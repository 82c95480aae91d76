//! Pluggable key-value backends.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::StorageError;

/// A string-keyed, string-valued durable store.
///
/// Backends may be unavailable in some contexts (a first render before
/// the page becomes interactive, private browsing modes). Callers gate
/// rehydration on `is_available` and treat failed writes as non-fatal.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn is_available(&self) -> bool;
}

/// In-memory backend.
///
/// Availability can be toggled to model contexts where durable storage
/// cannot be reached; while unavailable every operation fails with
/// `StorageError::Unavailable` and the held data is untouched.
#[derive(Debug)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            entries: RefCell::new(HashMap::new()),
            available: Cell::new(true),
        }
    }

    /// Start unavailable; flip on later with `set_available`.
    pub fn unavailable() -> Self {
        MemoryBackend {
            entries: RefCell::new(HashMap::new()),
            available: Cell::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.get()
    }
}
