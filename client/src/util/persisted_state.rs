//! Leptos hook pairing a reactive signal with a [`PersistedCell`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call [`use_persisted_state`] to get a read signal plus a setter.
//! The storage backend comes from a [`SharedStorage`] context when one is
//! provided (the app root does), otherwise from [`default_storage`].
//!
//! TRADE-OFFS
//! ==========
//! SSR has no access to the browser store, so the first render always shows
//! `initial`. The stored value is pushed into the signal by an effect once
//! the page has hydrated, keeping server and client markup identical.

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::persisted::{PersistedCell, Update};
use super::storage::{SharedStorage, default_storage};

#[cfg(test)]
#[path = "persisted_state_test.rs"]
mod persisted_state_test;

/// Setter half of [`use_persisted_state`].
pub struct PersistedSetter<T: Send + Sync + 'static> {
    cell: StoredValue<PersistedCell<T>>,
    value: RwSignal<T>,
}

impl<T: Send + Sync + 'static> Clone for PersistedSetter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PersistedSetter<T> {}

impl<T> PersistedSetter<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Apply `update`, refresh the signal, and write through to storage.
    ///
    /// Write failures are logged; the signal still reflects the new value.
    pub fn set(&self, update: impl Into<Update<T>>) {
        let update = update.into();
        let next = self.cell.try_update_value(move |cell| {
            if let Err(e) = cell.set(update) {
                leptos::logging::error!("error setting storage key \"{}\": {e}", cell.key());
            }
            cell.get().clone()
        });
        if let Some(next) = next {
            self.value.set(next);
        }
    }
}

/// Reactive value hydrated from `storage[key]` and written back on every set.
pub fn use_persisted_state<T>(key: &str, initial: T) -> (ReadSignal<T>, PersistedSetter<T>)
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let storage = use_context::<SharedStorage>().unwrap_or_else(default_storage);
    let value = RwSignal::new(initial.clone());
    let cell = StoredValue::new(PersistedCell::load(storage, key, initial));

    Effect::new(move || {
        if let Some(stored) = cell.try_with_value(|cell| cell.get().clone()) {
            value.set(stored);
        }
    });

    (value.read_only(), PersistedSetter { cell, value })
}
