//! Task records and the pure list transformations behind the to-do page.
//!
//! DESIGN
//! ======
//! Every operation takes the current list by reference and returns a fresh
//! `Vec`, so the page can hand the result straight to the persisted setter.
//! Misses (unknown id) return an equal copy rather than an error.

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use serde::{Deserialize, Serialize};

/// Storage key holding the JSON array of tasks.
pub const TODO_STORAGE_KEY: &str = "todos";

/// Task identifier: the creation-time millisecond timestamp.
///
/// Not guaranteed unique; two tasks created in the same millisecond collide.
pub type TaskId = i64;

/// A single to-do entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// New incomplete task. `text` is stored as given.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), completed: false }
    }
}

/// Trim draft input, returning `None` when nothing remains.
pub fn normalize_task_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Append a task built from `input`, or `None` if the input is blank.
pub fn add_task(tasks: &[Task], input: &str, id: TaskId) -> Option<Vec<Task>> {
    let text = normalize_task_text(input)?;
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(Task::new(id, text));
    Some(next)
}

/// Flip `completed` on every task whose id matches.
pub fn toggle_task(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task { completed: !task.completed, ..task.clone() }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Drop every task whose id matches.
pub fn delete_task(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

/// Number of tasks not yet completed.
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// Footer line such as `"2 of 3 tasks pending"`; `None` for an empty list.
pub fn pending_summary(tasks: &[Task]) -> Option<String> {
    if tasks.is_empty() {
        return None;
    }
    Some(format!("{} of {} tasks pending", pending_count(tasks), tasks.len()))
}
