//! Key/value persistence behind the session.
//!
//! In the browser this is `window.localStorage`; elsewhere (native builds and
//! tests) an in-memory map stands in for it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Failures (private mode, quota) are logged and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, dropping write to {}", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("Failed to write {} to localStorage: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, dropping removal of {}", key);
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("Failed to remove {} from localStorage: {:?}", key, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static NATIVE_STORE: MemoryStorage = MemoryStorage::default();
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        NATIVE_STORE.with(|s| s.get(key))
    }

    fn set(&self, key: &str, value: &str) {
        NATIVE_STORE.with(|s| s.set(key, value));
    }

    fn remove(&self, key: &str) {
        NATIVE_STORE.with(|s| s.remove(key));
    }
}

/// In-memory store. Clones share the same map.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let store = MemoryStorage::default();
        assert!(store.get("token").is_none());

        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        store.set("token", "def");
        assert_eq!(store.get("token").as_deref(), Some("def"));
        assert_eq!(store.len(), 1);

        store.remove("token");
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStorage::default();
        let other = store.clone();
        store.set("isLoggedIn", "true");
        assert_eq!(other.get("isLoggedIn").as_deref(), Some("true"));
    }
}
