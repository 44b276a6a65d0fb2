//! Browser `localStorage` helpers and the durable backend for the store.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so pages and
//! components can persist small values without repeating web-sys glue.
//! [`LocalStorage`] adapts the same storage to the `cart` crate's backend
//! trait; natively it reads nothing and drops writes, which keeps SSR
//! rendering deterministic.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string under `key`. Best-effort.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from storage. Best-effort.
pub fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_raw(key, &raw);
}

/// `localStorage`-backed durable storage for the cart store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl cart::StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        load_raw(key)
    }

    fn write(&self, key: &str, value: &str) {
        save_raw(key, value);
    }

    fn remove(&self, key: &str) {
        remove_key(key);
    }
}
