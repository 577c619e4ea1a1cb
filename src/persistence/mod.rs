//! Key-value persistence for user preferences
//!
//! Features:
//! - `Store` trait over string keys and values
//! - `MemoryStore` for native builds and tests
//! - `LocalStore` backed by browser LocalStorage (WASM only)

use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Minimal string key-value store
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-process store; contents are lost with the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Best available store for this platform
pub fn open_default() -> Box<dyn Store> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(store) = LocalStore::open() {
            return Box::new(store);
        }
        log::warn!("LocalStorage unavailable, preferences will not persist");
    }
    Box::new(MemoryStore::new())
}
