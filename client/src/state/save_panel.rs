//! Manual save / clear panel state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel writes and removes [`TODO_STORAGE_KEY`] directly, alongside the
//! automatic write-through done by the page's persisted list. Clearing here
//! only touches storage; the page keeps showing its in-memory list and the
//! next list mutation writes the key again.

#[cfg(test)]
#[path = "save_panel_test.rs"]
mod save_panel_test;

use crate::state::todo::{TODO_STORAGE_KEY, Task};
use crate::util::clock::format_timestamp;
use crate::util::storage::{KeyValueStore, StorageError, save_json};

/// State behind the save panel buttons and the "last saved" line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavePanelState {
    /// Millisecond timestamp of the last successful manual save.
    pub last_saved_ms: Option<f64>,
    /// True while a manual save is writing.
    pub is_saving: bool,
}

impl SavePanelState {
    /// Write `tasks` under the task key and record `now_ms` on success.
    ///
    /// On failure `last_saved_ms` keeps its previous value.
    pub fn save_now(&mut self, storage: &dyn KeyValueStore, tasks: &[Task], now_ms: f64) -> Result<(), StorageError> {
        self.is_saving = true;
        let result = save_json(storage, TODO_STORAGE_KEY, tasks);
        if result.is_ok() {
            self.last_saved_ms = Some(now_ms);
        }
        self.is_saving = false;
        result
    }

    /// Remove the task key and forget the last save time.
    pub fn clear(&mut self, storage: &dyn KeyValueStore) -> Result<(), StorageError> {
        storage.remove_item(TODO_STORAGE_KEY)?;
        self.last_saved_ms = None;
        Ok(())
    }

    /// Label for the save button.
    pub fn save_label(&self) -> &'static str {
        if self.is_saving { "Saving..." } else { "Save tasks" }
    }

    /// `"Last saved: <timestamp>"`, or `None` before the first manual save
    /// and when the timestamp cannot be rendered.
    pub fn last_saved_label(&self) -> Option<String> {
        self.last_saved_ms
            .map(format_timestamp)
            .filter(|at| !at.is_empty())
            .map(|at| format!("Last saved: {at}"))
    }
}
