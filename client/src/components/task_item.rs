//! One row of the task list: checkbox, label, delete button.

use leptos::prelude::*;

use crate::state::todo::{Task, TaskId};

/// A single task row. Completed tasks render struck through.
#[component]
pub fn TaskItem(task: Task, on_toggle: Callback<TaskId>, on_delete: Callback<TaskId>) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;

    view! {
        <li class="todo-item">
            <input
                class="todo-item__check"
                type="checkbox"
                prop:checked=completed
                on:change=move |_| on_toggle.run(id)
            />
            <span class="todo-item__text" class:todo-item__text--done=completed>
                {task.text}
            </span>
            <button
                class="todo-item__delete"
                on:click=move |_| on_delete.run(id)
                title="Delete task"
                aria-label="Delete task"
            >
                "🗑️"
            </button>
        </li>
    }
}
