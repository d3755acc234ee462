//! Browser-persisted key/value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only two keys are ever persisted: the raw API token and the serialized
//! signed-in user. Stores and the HTTP interceptor receive a `SharedStorage`
//! instead of reaching for `window.localStorage` directly, so native tests can
//! swap in `MemoryStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Reads and writes are synchronous and unguarded against other tabs writing
//! the same key; the last writer wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Raw API token attached to every outgoing request.
pub const AUTH_TOKEN_KEY: &str = "blog_auth_token_vue";

/// JSON-serialized `CurrentUser`.
pub const AUTH_USER_KEY: &str = "blog_auth_vue";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected write: {0}")]
    Rejected(String),
    #[error("value could not be serialized: {0}")]
    Serialize(String),
}

/// String key/value store with `localStorage` semantics.
pub trait KeyValueStore: Send + Sync {
    /// Read `key`, `None` if absent or storage is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or refuses the write (quota).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

pub type SharedStorage = Arc<dyn KeyValueStore>;

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Shared handle for context injection.
    #[must_use]
    pub fn shared() -> SharedStorage {
        Arc::new(Self)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store used during server rendering and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Seed a store with initial entries.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
        Self { entries: Mutex::new(map) }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Load and parse a JSON value stored under `key`.
///
/// Absent keys and unparseable blobs both yield `None`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("ignoring unparseable stored value for {key}: {e}");
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or the store refuses the write.
pub fn save_json<T: Serialize>(storage: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set(key, &raw)
}

/// Current API token, empty when none is stored.
pub fn read_token(storage: &dyn KeyValueStore) -> String {
    storage.get(AUTH_TOKEN_KEY).unwrap_or_default()
}

/// Persist the API token returned by sign-in.
///
/// # Errors
///
/// Returns an error if the store refuses the write.
pub fn write_token(storage: &dyn KeyValueStore, token: &str) -> Result<(), StorageError> {
    storage.set(AUTH_TOKEN_KEY, token)
}

pub fn clear_token(storage: &dyn KeyValueStore) {
    storage.remove(AUTH_TOKEN_KEY);
}
