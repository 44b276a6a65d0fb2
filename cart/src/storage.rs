//! Durable key-value storage backend.
//!
//! The store mirrors its collections into whatever implements
//! [`StorageBackend`]. In the browser that is `localStorage` (implemented in
//! the client crate behind its `hydrate` feature); natively and in tests it
//! is [`MemoryStorage`]. All three operations are best-effort and
//! infallible: a write that cannot land is dropped silently, matching how
//! the storefront treats a full or unavailable `localStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A durable string-to-string key-value store.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str);

    /// Remove `key` and its value, if present.
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and native builds.
///
/// Clones share the same underlying map, so a test can hold one handle,
/// hand a clone to a store, and then inspect what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
