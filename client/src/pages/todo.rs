//! To-do list page: add form, task rows, pending summary, save panel.
//!
//! The task list lives in a persisted signal keyed by [`TODO_STORAGE_KEY`];
//! every add/toggle/delete goes through its setter and is written back to
//! storage immediately.

use leptos::prelude::*;

use crate::components::save_panel::SavePanel;
use crate::components::task_item::TaskItem;
use crate::state::todo::{
    TODO_STORAGE_KEY, Task, TaskId, add_task, delete_task, normalize_task_text, pending_summary, toggle_task,
};
use crate::util::clock::timestamp_id;
use crate::util::persisted::Update;
use crate::util::persisted_state::use_persisted_state;

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

/// Update appending `draft` as a new task, or `None` for a blank draft.
///
/// The append runs against the stored list, not the rendered one, so an add
/// made before hydration sync keeps what was already saved.
pub(crate) fn add_update(draft: &str, id: TaskId) -> Option<Update<Vec<Task>>> {
    let text = normalize_task_text(draft)?;
    Some(Update::apply(move |current: &Vec<Task>| {
        add_task(current, &text, id).unwrap_or_else(|| current.clone())
    }))
}

#[component]
pub fn TodoPage() -> impl IntoView {
    let (tasks, set_tasks) = use_persisted_state::<Vec<Task>>(TODO_STORAGE_KEY, Vec::new());
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(update) = draft.with_untracked(|text| add_update(text, timestamp_id())) {
            set_tasks.set(update);
            draft.set(String::new());
        }
    };

    let on_toggle = Callback::new(move |id: TaskId| {
        set_tasks.set(Update::apply(move |current: &Vec<Task>| toggle_task(current, id)));
    });
    let on_delete = Callback::new(move |id: TaskId| {
        set_tasks.set(Update::apply(move |current: &Vec<Task>| delete_task(current, id)));
    });

    view! {
        <div class="todo-page">
            <div class="todo-card">
                <h1 class="todo-card__title">"📝 Todo List"</h1>

                <SavePanel tasks=tasks/>

                <form class="todo-form" on:submit=on_submit>
                    <input
                        class="todo-form__input"
                        type="text"
                        placeholder="What do you need to do?"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="todo-form__submit" type="submit">"Add"</button>
                </form>

                <Show
                    when=move || tasks.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="todo-empty">"No pending tasks. Add a new one!"</p> }
                >
                    <ul class="todo-list">
                        <For
                            each=move || tasks.get()
                            key=|task: &Task| (task.id, task.completed, task.text.clone())
                            children=move |task: Task| view! { <TaskItem task=task on_toggle=on_toggle on_delete=on_delete/> }
                        />
                    </ul>
                </Show>

                {move || {
                    tasks
                        .with(|t| pending_summary(t))
                        .map(|summary| view! { <p class="todo-summary">{summary}</p> })
                }}
            </div>
        </div>
    }
}
