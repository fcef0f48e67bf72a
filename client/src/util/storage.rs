//! Key-value storage capability used by the persisted-state layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser `localStorage` is only reached through [`KeyValueStore`], so the
//! persisted-state cell and the save panel run unchanged against the
//! in-memory [`MemoryStorage`] in native tests and during SSR.
//!
//! TRADE-OFFS
//! ==========
//! Every call goes straight to the backend; nothing is cached here. Two
//! consumers of the same key (two tabs, or two cells) see last-write-wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`KeyValueStore`] operations and the JSON helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage is missing or disabled (no window, private browsing).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Writing `key` would exceed the storage quota. `limit` is the quota in
    /// bytes when the backend knows it; browsers do not report it.
    #[error(
        "storage quota exceeded writing \"{key}\"{}",
        .limit.map_or_else(String::new, |limit| format!(" (limit {limit} bytes)"))
    )]
    QuotaExceeded { key: String, limit: Option<usize> },
    /// The backend rejected an operation for another reason.
    #[error("storage {op} failed for \"{key}\": {message}")]
    Backend { op: &'static str, key: String, message: String },
    /// The value could not be serialized to JSON.
    #[error("failed to encode value for \"{key}\": {source}")]
    Encode { key: String, source: serde_json::Error },
    /// The stored text is not valid JSON for the requested type.
    #[error("failed to decode value for \"{key}\": {source}")]
    Decode { key: String, source: serde_json::Error },
}

/// Synchronous string key-value store with `localStorage` semantics.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`, `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to the active storage backend, provided via Leptos context.
pub type SharedStorage = Arc<dyn KeyValueStore>;

/// Backend for the current build: `localStorage` in the browser, an
/// in-memory store everywhere else.
pub fn default_storage() -> SharedStorage {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStorage::new())
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// An absent key and an empty stored string both yield `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Decode { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(storage: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    storage.set_item(key, &raw)
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-memory [`KeyValueStore`].
///
/// Clones share the same underlying map, which makes two handles behave like
/// two tabs of one browser profile. Can simulate disabled storage and a byte
/// quota so failure paths are testable without a browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    quota_bytes: Option<usize>,
    disabled: bool,
}

impl MemoryInner {
    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose total key + value size may not exceed `limit_bytes`.
    #[must_use]
    pub fn with_quota(limit_bytes: usize) -> Self {
        let storage = Self::default();
        if let Ok(mut inner) = storage.inner.lock() {
            inner.quota_bytes = Some(limit_bytes);
        }
        storage
    }

    /// Store on which every operation fails as unavailable.
    #[must_use]
    pub fn disabled() -> Self {
        let storage = Self::default();
        storage.set_disabled(true);
        storage
    }

    /// Enable or disable the store at runtime; stored items are kept.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.disabled = disabled;
        }
    }

    /// Raw stored text for `key`, bypassing the disabled flag.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.lock().map_or(None, |inner| inner.items.get(key).cloned())
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().map_or(0, |inner| inner.items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn enabled(&self) -> Result<MutexGuard<'_, MemoryInner>, StorageError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_owned()))?;
        if inner.disabled {
            return Err(StorageError::Unavailable("storage is disabled".to_owned()));
        }
        Ok(inner)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.enabled()?.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.enabled()?;
        if let Some(limit) = inner.quota_bytes {
            let needed = inner.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { key: key.to_owned(), limit: Some(limit) });
            }
        }
        inner.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.enabled()?.items.remove(key);
        Ok(())
    }
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// [`KeyValueStore`] backed by `window.localStorage`.
///
/// The handle is looked up on every call, so a store that becomes
/// unavailable mid-session surfaces as [`StorageError::Unavailable`].
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".to_owned())),
            Err(e) => Err(StorageError::Unavailable(describe_js_error(&e))),
        }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?.get_item(key).map_err(|e| StorageError::Backend {
            op: "read",
            key: key.to_owned(),
            message: describe_js_error(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?.set_item(key, value).map_err(|e| {
            if js_error_name(&e).as_deref() == Some("QuotaExceededError") {
                StorageError::QuotaExceeded { key: key.to_owned(), limit: None }
            } else {
                StorageError::Backend { op: "write", key: key.to_owned(), message: describe_js_error(&e) }
            }
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?.remove_item(key).map_err(|e| StorageError::Backend {
            op: "remove",
            key: key.to_owned(),
            message: describe_js_error(&e),
        })
    }
}

#[cfg(feature = "hydrate")]
fn js_error_name(value: &wasm_bindgen::JsValue) -> Option<String> {
    use wasm_bindgen::JsCast as _;
    value.dyn_ref::<js_sys::Error>().map(|err| String::from(err.name()))
}

#[cfg(feature = "hydrate")]
fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast as _;
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => format!("{}: {}", String::from(err.name()), String::from(err.message())),
        None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}
