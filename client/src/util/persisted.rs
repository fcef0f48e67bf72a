//! Value cell mirrored to a [`KeyValueStore`] key.
//!
//! DESIGN
//! ======
//! `PersistedCell` hydrates from storage once, on construction, and writes
//! the whole value back after every update. The in-memory value is the source
//! of truth for the page: a failed write is logged and leaves memory ahead of
//! storage until the next successful write.

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::storage::{SharedStorage, StorageError, load_json, save_json};

/// A setter argument: either a replacement value or a transformation of the
/// current value.
pub enum Update<T> {
    /// Store this value as-is.
    Replace(T),
    /// Derive the next value from the current one.
    Apply(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Update<T> {
    /// Wrap a transformation of the current value.
    pub fn apply(f: impl FnOnce(&T) -> T + 'static) -> Self {
        Self::Apply(Box::new(f))
    }

    /// Resolve the update against `current`.
    pub fn resolve(self, current: &T) -> T {
        match self {
            Self::Replace(value) => value,
            Self::Apply(f) => f(current),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Self::Replace(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Update<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Self::Apply(_) => f.write_str("Apply(..)"),
        }
    }
}

/// In-memory value paired with a storage key it is written through to.
pub struct PersistedCell<T> {
    key: String,
    value: T,
    storage: SharedStorage,
}

impl<T> PersistedCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Hydrate from `storage[key]`, falling back to `initial` when the key is
    /// absent or unreadable. Read failures are logged, never returned.
    pub fn load(storage: SharedStorage, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = match load_json::<T>(storage.as_ref(), &key) {
            Ok(Some(value)) => value,
            Ok(None) => initial,
            Err(e) => {
                leptos::logging::warn!("error reading storage key \"{key}\": {e}");
                initial
            }
        };
        Self { key, value, storage }
    }

    /// Resolve `update`, replace the in-memory value, then write it through.
    ///
    /// The in-memory value changes even when the write fails.
    pub fn set(&mut self, update: impl Into<Update<T>>) -> Result<(), StorageError> {
        self.value = update.into().resolve(&self.value);
        save_json(self.storage.as_ref(), &self.key, &self.value)
    }
}

impl<T> PersistedCell<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedCell")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
