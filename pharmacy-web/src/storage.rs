//! Durable slot for the bearer token.

use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};
use tracing::warn;

/// Where the session token survives page reloads.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn remove(&self);
}

/// `window.localStorage`, holding the raw token string under one key.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        // Raw access: the value is a bare string, not a JSON document.
        match LocalStorage::raw().get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = %self.key, ?err, "failed to read token from local storage");
                None
            }
        }
    }

    fn store(&self, token: &str) {
        if let Err(err) = LocalStorage::raw().set_item(&self.key, token) {
            warn!(key = %self.key, ?err, "failed to persist token");
        }
    }

    fn remove(&self) {
        if let Err(err) = LocalStorage::raw().remove_item(&self.key) {
            warn!(key = %self.key, ?err, "failed to remove persisted token");
        }
    }
}

/// In-process slot; used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.load(), None);
        storage.store("abc");
        assert_eq!(storage.load().as_deref(), Some("abc"));
        storage.remove();
        storage.remove();
        assert_eq!(storage.load(), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_keeps_raw_string() {
        let storage = BrowserStorage::new("pharmacy-test-token");
        storage.store("tok-1");
        assert_eq!(storage.load().as_deref(), Some("tok-1"));
        storage.remove();
        assert_eq!(storage.load(), None);
    }
}
